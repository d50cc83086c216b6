// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier egui en noms de touches style DOM ("7", "+", "Enter"…)
//   puis laisser le noyau décider (Commande::depuis_touche)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de TextEdit : le clavier appartient entièrement à la calculatrice.
        for touche in touches_de_la_frame(ctx) {
            self.touche(&touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

/// Événements clavier de la frame, dans l’ordre, en noms de touches.
/// - Text("…") : un nom par caractère tapé ("7", "+", "(", "="…)
/// - Enter / Escape / Backspace : touches nommées
fn touches_de_la_frame(ctx: &egui::Context) -> Vec<String> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => out.extend(t.chars().map(String::from)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    let nom = match key {
                        egui::Key::Enter => "Enter",
                        egui::Key::Escape => "Escape",
                        egui::Key::Backspace => "Backspace",
                        _ => continue,
                    };
                    out.push(nom.to_string());
                }
                _ => {}
            }
        }
        out
    })
}
