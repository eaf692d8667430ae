// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// Deux niveaux:
// - ErreurCalc : variantes par étape (tokenisation / RPN / évaluation),
//   pour les consommateurs diagnostics (et pour les logs).
// - Erreur : étiquette unique repliée, seul contrat public de la façade.
//   Le visor affiche son Display tel quel.

/// Erreur détaillée, une variante par cause.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ErreurCalc {
    /// Aucun jeton extrait de l'entrée (vide ou rien de reconnaissable).
    #[error("expression invalide")]
    ExpressionInvalide,

    /// ')' sans '(' correspondante, ou '(' jamais fermée.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// Arité violée (opérande manquante) ou pile finale ≠ 1 valeur.
    #[error("expression mal formée")]
    ExpressionMalFormee,

    /// Dénominateur exactement zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// Symbole non-opérateur arrivé jusqu'à l'évaluation.
    /// Inatteignable si to_rpn fait son travail, mais traité quand même.
    #[error("opérateur inconnu: '{0}'")]
    OperateurInconnu(char),
}

/// Étiquette publique unique.
///
/// Contrat volontairement pauvre: l'appelant ne distingue pas une division
/// par zéro d'une parenthèse orpheline. La cause précise part dans les logs
/// (voir eval.rs) et reste accessible via `eval_expression`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Erreur")]
pub struct Erreur;

impl From<ErreurCalc> for Erreur {
    fn from(_: ErreurCalc) -> Self {
        Erreur
    }
}
