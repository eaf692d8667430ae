//! src/app/journal.rs
//!
//! Journal des calculs (historique persisté).
//!
//! Rôle : liste ordonnée d'entrées « expression = résultat » horodatées,
//! la plus récente en tête, plafonnée aux 50 dernières (la plus ancienne
//! est évincée). Le journal est un objet passé explicitement à l'état de
//! l'app, jamais un global ambiant.
//!
//! Contrats :
//! - Seuls les calculs RÉUSSIS sont journalisés (jamais « Erreur »).
//! - Le résultat stocké est le texte affiché (déjà arrondi), pas le f64 brut.
//! - Sérialisation JSON sous une seule clé de stockage (voir app.rs).

use serde::{Deserialize, Serialize};

/// Plafond d'entrées conservées (les plus récentes).
pub const CAPACITE_JOURNAL: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntreeJournal {
    pub horodatage: String,
    pub expression: String,
    pub resultat: String,
}

impl std::fmt::Display for EntreeJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} = {}",
            self.horodatage, self.expression, self.resultat
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    entrees: Vec<EntreeJournal>,
}

impl Journal {
    /// Ajoute une entrée horodatée à l'instant courant (heure locale).
    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        let horodatage = chrono::Local::now().format("%d/%m/%Y %H:%M").to_string();
        self.ajouter_horodate(horodatage, expression, resultat);
    }

    /// Variante à horodatage fourni (tests + rejeu).
    pub fn ajouter_horodate(
        &mut self,
        horodatage: impl Into<String>,
        expression: impl Into<String>,
        resultat: impl Into<String>,
    ) {
        self.entrees.insert(
            0,
            EntreeJournal {
                horodatage: horodatage.into(),
                expression: expression.into(),
                resultat: resultat.into(),
            },
        );

        // éviction: la plus ancienne sort
        if self.entrees.len() > CAPACITE_JOURNAL {
            self.entrees.pop();
        }
    }

    /// Entrées, la plus récente en tête.
    pub fn entrees(&self) -> &[EntreeJournal] {
        &self.entrees
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }
}
