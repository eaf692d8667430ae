// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le visor est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Toute touche passe par etat::Touche (la vue ne décide rien)
//
// Note :
// - Le visor reste un TextEdit éditable : au clavier, on tape directement
//   l'expression; les boutons, eux, passent par le dispatch (garde anti
//   double point, remplacement du "0", etc.)

use eframe::egui;

use super::etat::{AppCalc, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice de poche");
                ui.add_space(6.0);

                self.ui_visor(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                if self.montrer_journal {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    self.ui_journal(ui);
                }
            });
    }

    fn ui_visor(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 0.1+0.2, -5+2")
                .id_source("visor_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton du pavé, on redonne le focus au visor
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le visor est focus) ---
        // On évite les déclenchements "globaux" quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.appuyer(Touche::Evalue);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Remet le visor à 0", Touche::Efface);
                self.bouton(ui, "(", "Parenthèse ouvrante", Touche::Parenthese('('));
                self.bouton(ui, ")", "Parenthèse fermante", Touche::Parenthese(')'));
                self.bouton(ui, "/", "Division", Touche::Operateur('/'));
                ui.end_row();

                self.bouton(ui, "7", "", Touche::Chiffre('7'));
                self.bouton(ui, "8", "", Touche::Chiffre('8'));
                self.bouton(ui, "9", "", Touche::Chiffre('9'));
                self.bouton(ui, "*", "Multiplication", Touche::Operateur('*'));
                ui.end_row();

                self.bouton(ui, "4", "", Touche::Chiffre('4'));
                self.bouton(ui, "5", "", Touche::Chiffre('5'));
                self.bouton(ui, "6", "", Touche::Chiffre('6'));
                self.bouton(ui, "-", "Soustraction", Touche::Operateur('-'));
                ui.end_row();

                self.bouton(ui, "1", "", Touche::Chiffre('1'));
                self.bouton(ui, "2", "", Touche::Chiffre('2'));
                self.bouton(ui, "3", "", Touche::Chiffre('3'));
                self.bouton(ui, "+", "Addition", Touche::Operateur('+'));
                ui.end_row();

                self.bouton(ui, "0", "", Touche::Chiffre('0'));
                self.bouton(ui, ".", "Point décimal", Touche::Point);
                self.bouton(ui, "=", "Évalue l'expression", Touche::Evalue);
                self.bouton(
                    ui,
                    "Hist",
                    "Montre/cache l'historique",
                    Touche::BasculeJournal,
                );
                ui.end_row();
            });
    }

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(format!("Historique ({})", self.journal.len()))
            .default_open(true)
            .show(ui, |ui| {
                if self.journal.est_vide() {
                    ui.monospace("Aucun historique.");
                    return;
                }

                egui::Frame::group(ui.style())
                    .fill(ui.visuals().extreme_bg_color)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        for entree in self.journal.entrees() {
                            ui.monospace(entree.to_string());
                        }
                    });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized([56.0, 34.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
