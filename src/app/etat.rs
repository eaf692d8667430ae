//! src/app/etat.rs
//!
//! État UI (sans vue, sans parsing).
//!
//! Rôle : contenir l'état de la calculatrice (visor, journal, panneau
//! historique) et appliquer les touches via un dispatch explicite
//! (enum Touche), découplé de tout toolkit d'affichage.
//!
//! Contrats :
//! - Aucune logique d'affichage ici; vue.rs ne fait que router les clics
//!   vers `appuyer`.
//! - La seule traversée du noyau se fait dans `evaluer` (touche =).
//! - Actions déterministes, sans effet de bord caché.

use crate::app::journal::Journal;
use crate::noyau;

/// Contenu initial du visor (et valeur après C).
const VISOR_INITIAL: &str = "0";

/// Texte affiché quand le noyau échoue (Display de l'étiquette repliée).
fn texte_erreur() -> String {
    noyau::Erreur.to_string()
}

/// Une touche du pavé, déjà interprétée (symbole -> action).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// '0'..='9'
    Chiffre(char),
    /// '.' (refusé si le nombre en cours en a déjà un)
    Point,
    /// '+', '-', '*', '/'
    Operateur(char),
    /// '(' ou ')'
    Parenthese(char),
    /// C : visor remis à "0"
    Efface,
    /// = : évalue via le noyau
    Evalue,
    /// Montre/cache le panneau historique
    BasculeJournal,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- visor (entrée ET sortie, comme une calculatrice de poche) ---
    pub entree: String,

    // --- journal des calculs réussis (injecté, persisté par app.rs) ---
    pub journal: Journal,

    // --- panneau historique visible ? ---
    pub montrer_journal: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus au visor après un clic bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::nouveau(Journal::default())
    }
}

impl AppCalc {
    /// Construit l'état avec un journal injecté (rechargé du stockage).
    pub fn nouveau(journal: Journal) -> Self {
        Self {
            entree: VISOR_INITIAL.to_string(),
            journal,
            montrer_journal: false,
            focus_entree: true,
        }
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Applique une touche à l'état. Point d'entrée unique de vue.rs.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.inserer(c, false),
            Touche::Point => self.inserer_point(),
            Touche::Operateur(c) => self.inserer(c, true),
            Touche::Parenthese(c) => self.inserer(c, false),
            Touche::Efface => self.clear_entree(),
            Touche::Evalue => self.evaluer(),
            Touche::BasculeJournal => self.montrer_journal = !self.montrer_journal,
        }
        self.focus_entree = true;
    }

    /* ------------------------ Accumulation du visor ------------------------ */

    /// Le visor affiche-t-il un état « remplaçable » (initial ou erreur) ?
    fn visor_remplacable(&self) -> bool {
        self.entree == VISOR_INITIAL || self.entree == texte_erreur()
    }

    /// Insère un symbole au visor.
    /// Sur "0" ou "Erreur", le symbole REMPLACE le contenu, sauf un
    /// opérateur binaire sur "0", qui est ignoré (il n'aurait pas
    /// d'opérande gauche sensée).
    fn inserer(&mut self, c: char, est_operateur: bool) {
        if self.visor_remplacable() {
            if est_operateur && self.entree == VISOR_INITIAL {
                return;
            }
            self.entree.clear();
        }
        self.entree.push(c);
    }

    /// Garde anti double point: le segment numérique en cours (après le
    /// dernier opérateur ou parenthèse) ne peut porter qu'un seul '.'.
    fn inserer_point(&mut self) {
        if !self.visor_remplacable() {
            let segment = self
                .entree
                .rsplit(|c| matches!(c, '+' | '-' | '*' | '/' | '(' | ')'))
                .next()
                .unwrap_or("");
            if segment.contains('.') {
                return;
            }
        }
        self.inserer('.', false);
    }

    /// C : visor remis à l'état initial (le journal n'est pas touché).
    pub fn clear_entree(&mut self) {
        self.entree = VISOR_INITIAL.to_string();
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// = : passe le visor au noyau, affiche le résultat ou « Erreur ».
    /// Un calcul réussi est journalisé (expression + texte affiché).
    fn evaluer(&mut self) {
        let expression = self.entree.trim().to_string();
        if expression.is_empty() || expression == texte_erreur() {
            return;
        }

        match noyau::calculer(&expression) {
            Ok(v) => {
                let texte = noyau::format_resultat(v);
                self.journal.ajouter(expression, texte.clone());
                self.entree = texte;
            }
            Err(_) => {
                self.entree = texte_erreur();
            }
        }
    }
}
