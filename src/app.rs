// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + journal.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB), y compris la
//   persistance du journal (une clé, JSON)
//
// Important:
// - La gestion Enter est faite dans vue.rs (au bon endroit: quand le visor
//   a le focus).
// - Ici, on évite d'appeler des méthodes privées de vue.rs.

pub mod etat;
pub mod journal;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use journal::Journal;

/// Clé unique du journal dans le stockage eframe
/// (natif: fichier de config; web: localStorage).
pub const CLE_JOURNAL: &str = "calculatrice_journal";

/// Recharge le journal depuis le stockage. Un JSON illisible (version
/// antérieure, stockage corrompu) repart sur un journal vide.
pub fn charger_journal(storage: Option<&dyn eframe::Storage>) -> Journal {
    let Some(texte) = storage.and_then(|s| s.get_string(CLE_JOURNAL)) else {
        return Journal::default();
    };

    match serde_json::from_str(&texte) {
        Ok(journal) => journal,
        Err(e) => {
            log::warn!("journal illisible, repart à vide: {e}");
            Journal::default()
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = remise à zéro du visor (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree(); // méthode publique de etat.rs
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.journal) {
            Ok(texte) => storage.set_string(CLE_JOURNAL, texte),
            Err(e) => log::warn!("journal non sauvegardé: {e}"),
        }
    }
}
