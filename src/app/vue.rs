// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : pavé 4 colonnes, focus redonné après clic (focus_entree)

use eframe::egui;

use calculatrice_basique::noyau::{calculate_detail, format_nombre, DemarcheNoyau};

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // équation précédente (discrète)
        ui.weak(if self.precedente.is_empty() {
            " "
        } else {
            self.precedente.as_str()
        });

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::RIGHT)
                .id_salt("entree_edit"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
            if !self.erreur_detail.is_empty() {
                ui.small(&self.erreur_detail);
            }
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Touche::*;

        const LIGNES: [[Touche; 4]; 5] = [
            [Clear, Signe, Op('%'), Op('÷')],
            [Chiffre('7'), Chiffre('8'), Chiffre('9'), Op('×')],
            [Chiffre('4'), Chiffre('5'), Chiffre('6'), Op('-')],
            [Chiffre('1'), Chiffre('2'), Chiffre('3'), Op('+')],
            [Suppr, Chiffre('0'), Chiffre('.'), Egal],
        ];

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in LIGNES {
                    for t in ligne {
                        self.bouton(ui, t);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let label = touche.label();
        let resp = ui
            .add_sized([64.0, 44.0], egui::Button::new(label.as_str()))
            .on_hover_text(touche.aide());

        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.ajouter_chiffre(c),
            Touche::Op(c) => self.ajouter_operation(c),
            Touche::Clear => self.clear_entree(),
            Touche::Signe => self.basculer_signe(),
            Touche::Suppr => self.supprimer(),
            Touche::Egal => self.eval_via_noyau(),
        }
        self.focus_entree = true;
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Après × ÷ %", "demarche_haut", &self.demarche.palier_haut);
                Self::champ_demarche(ui, "Après + -", "demarche_bas", &self.demarche.palier_bas);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat ou erreur dans l’état UI.
    pub(crate) fn eval_via_noyau(&mut self) {
        let expression = self.entree.trim().to_string();

        match calculate_detail(&expression) {
            Ok((valeur, d_noyau)) => {
                let resultat = format_nombre(valeur);
                tracing::debug!(%expression, %resultat, "évaluation");
                self.set_resultat(expression, resultat, Self::demarche_ui(d_noyau));
            }
            Err(err) => {
                tracing::warn!(%expression, error = %err, "évaluation refusée");
                self.set_erreur(expression, &err);
            }
        }
    }

    fn demarche_ui(d: DemarcheNoyau) -> Demarche {
        Demarche {
            jetons: d.jetons,
            palier_haut: d.palier_haut,
            palier_bas: d.palier_bas,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Op(char),
    Clear,
    Signe,
    Suppr,
    Egal,
}

impl Touche {
    fn label(self) -> String {
        match self {
            Touche::Chiffre(c) | Touche::Op(c) => c.to_string(),
            Touche::Clear => "C".into(),
            Touche::Signe => "±".into(),
            Touche::Suppr => "DEL".into(),
            Touche::Egal => "=".into(),
        }
    }

    fn aide(self) -> &'static str {
        match self {
            Touche::Chiffre(_) => "Chiffre",
            Touche::Op('%') => "Pourcentage : a % b = a × b/100",
            Touche::Op(_) => "Opérateur",
            Touche::Clear => "Remise à zéro",
            Touche::Signe => "Inverse le signe du dernier nombre",
            Touche::Suppr => "Efface le dernier symbole",
            Touche::Egal => "Évalue l’expression",
        }
    }
}
