// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : historique (petit) au-dessus de l’affichage (grand)
// - Bascule DEG/RAD qui montre le mode courant
// - Pavé : fonctions scientifiques, spéciaux, chiffres, opérateurs
//
// Chaque bouton envoie un jeton brut ; le sens est décidé par le noyau (commande.rs).

use eframe::egui;

use super::etat::AppCalc;

/// Taille des boutons du pavé.
const TAILLE_BOUTON: [f32; 2] = [64.0, 40.0];

/// Lignes du pavé : (étiquette affichée, jeton envoyé).
const PAVE: [[(&str, &str); 5]; 8] = [
    [("sin", "sin"), ("cos", "cos"), ("tan", "tan"), ("(", "("), (")", ")")],
    [("asin", "asin"), ("acos", "acos"), ("atan", "atan"), ("^", "^"), ("!", "!")],
    [("√", "sqrt"), ("log", "log"), ("ln", "ln"), ("x²", "x²"), ("EXP", "exp")],
    [("π", "π"), ("e", "e"), ("C", "clear"), ("DEL", "delete"), ("/", "/")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("*", "*"), ("", "")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("-", "-"), ("", "")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("+", "+"), ("", "")],
    [("0", "0"), (".", "."), ("=", "equals"), ("", ""), ("", "")],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice scientifique");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.ui_bascule_angle(ui);
            });
        });
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_bascule_angle(&mut self, ui: &mut egui::Ui) {
        let mode = self.calc.mode_angle();
        let resp = ui
            .add_sized([56.0, 28.0], egui::Button::new(mode.etiquette()))
            .on_hover_text("Bascule degrés / radians");
        if resp.clicked() {
            self.bouton("toggle-angle-mode");
            resp.surrender_focus();
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // historique : expression qui vient d’être évaluée
                    ui.label(
                        egui::RichText::new(self.calc.historique())
                            .monospace()
                            .weak(),
                    );

                    let affichage = self.calc.affichage();
                    let mut texte = egui::RichText::new(affichage).monospace().size(28.0);
                    if affichage == crate::noyau::format::AFFICHAGE_ERREUR {
                        texte = texte.color(ui.visuals().error_fg_color);
                    }
                    ui.label(texte);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (etiquette, jeton) in ligne {
                        if jeton.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_pave(ui, etiquette, jeton);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_pave(&mut self, ui: &mut egui::Ui, etiquette: &str, jeton: &str) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(etiquette));
        if resp.clicked() {
            self.bouton(jeton);
            // Enter ne doit pas “recliquer” le dernier bouton : il est réservé à "="
            resp.surrender_focus();
        }
    }
}
