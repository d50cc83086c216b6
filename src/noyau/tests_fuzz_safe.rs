//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une Valeur est toujours finie, et son affichage se ré-évalue en elle-même
//! - invariant accumulateur : l’affichage n’est jamais vide

use std::time::{Duration, Instant};

use super::accumulateur::Calculatrice;
use super::commande::Commande;
use super::eval::{evaluer, Resultat};
use super::trig::ModeAngle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn choisir<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const FONCTIONS: [&str; 9] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "log", "ln",
];

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(100), rng.pick(10)),
        2 => "pi".to_string(),
        3 => "e".to_string(),
        4 => format!("{}!", rng.pick(8)),
        5 => format!("{}e{}", 1 + rng.pick(9), rng.pick(4)),
        _ => format!(".{}", rng.pick(100)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(10) {
        0 | 1 => gen_atom(rng),
        2 => format!(
            "({}+{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        3 => format!(
            "{}-{}",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        4 => format!(
            "{}*{}",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        5 => format!(
            "({})/({})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        6 => format!("{}^{}", gen_atom(rng), rng.pick(4)),
        7 => format!("-{}", gen_expr(rng, depth - 1)),
        // fonctions : appels imbriqués permis
        _ => format!("{}({})", rng.choisir(&FONCTIONS), gen_expr(rng, depth - 1)),
    }
}

/// Bruit : suites de caractères plausibles (mal formées le plus souvent).
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: [&str; 22] = [
        "0", "1", "9", ".", "+", "-", "*", "/", "^", "!", "(", ")", "e", "π", "sin(", "ln(", "**",
        " ", "x", "=", ";", "sqrt",
    ];
    let n = rng.pick(16);
    (0..n).map(|_| rng.choisir(&ALPHABET)).collect()
}

/* ------------------------ Invariants ------------------------ */

fn check_valeur(expr: &str, r: Resultat, mode: ModeAngle) {
    if let Resultat::Valeur(v) = r {
        assert!(v.is_finite(), "valeur non finie: expr={expr:?} v={v}");

        let relu = evaluer(&r.affichage(), mode).valeur();
        let relu = relu.unwrap_or_else(|| panic!("affichage non ré-évaluable: expr={expr:?}"));
        let tol = 1e-12 * v.abs().max(1.0);
        assert!(
            (relu - v).abs() <= tol,
            "idempotence: expr={expr:?} v={v} relu={relu}"
        );
    }
}

fn campagne(seed: u64, n: usize) -> Vec<Resultat> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| {
            let e = gen_expr(&mut rng, 4);
            evaluer(&e, ModeAngle::Degres)
        })
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_idempotence() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for i in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = if i % 2 == 0 {
            ModeAngle::Degres
        } else {
            ModeAngle::Radians
        };

        let r = evaluer(&expr, mode);
        check_valeur(&expr, r, mode);
        if r.est_erreur() {
            seen_err += 1;
        } else {
            seen_ok += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");

    // Même seed => mêmes expressions => mêmes sorties
    assert_eq!(campagne(0xBADC0DE, 150), campagne(0xBADC0DE, 150));
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng);
        let r = evaluer(&expr, ModeAngle::Radians);
        check_valeur(&expr, r, ModeAngle::Radians);
    }
}

#[test]
fn fuzz_safe_accumulateur_jamais_vide() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    const JETONS: [&str; 33] = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "(", ")",
        "^", "!", "x²", "exp", "π", "e", "sin", "cos", "asin", "sqrt", "log", "ln", "clear",
        "delete", "equals", "toggle-angle-mode",
    ];

    let mut rng = Rng::new(0xACC_u64);
    let mut calc = Calculatrice::default();

    for _ in 0..5000 {
        budget(t0, max);

        let j = rng.choisir(&JETONS);
        let cmd = Commande::depuis_jeton(j).unwrap_or_else(|| panic!("jeton inconnu: {j:?}"));
        calc.executer(cmd);

        assert!(!calc.affichage().is_empty(), "affichage vide après {j:?}");
        if cmd == Commande::Egal {
            // après "=", l’affichage est un résultat ou "Error", jamais l’expression brute
            let a = calc.affichage();
            assert!(a == "Error" || a.parse::<f64>().is_ok(), "affichage: {a:?}");
        }
    }
}
