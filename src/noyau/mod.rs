//! Noyau quatre opérations (flottant)
//!
//! Organisation interne :
//! - erreur.rs  : variantes d'erreur + étiquette publique repliée
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard + réduction de pile
//! - format.rs  : arrondi d'affichage (8 décimales max) + rendu texte
//! - eval.rs    : pipeline complet
//!
//! Le noyau ne dépend d'aucune couche de présentation et ne garde aucun
//! état entre deux appels.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_quatre_ops;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Erreur, ErreurCalc};
pub use eval::{calculer, eval_expression};
pub use format::format_resultat;
