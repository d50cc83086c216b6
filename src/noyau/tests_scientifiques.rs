//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : balayer des familles d’expressions sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (longueur, profondeur)
//!
//! Notes :
//! - Les résultats sont arrondis à 10 décimales : les identités se vérifient
//!   à 1e-10 près, pas bit à bit.
//! - Au-delà de ~1e6, l’arrondi (x·1e10) sort des entiers exacts de f64 :
//!   les comparaisons sur grands nombres se font en relatif.

use std::time::{Duration, Instant};

use super::analyse::{HAUTEUR_MAX, PROFONDEUR_MAX};
use super::erreur::ErreurCalc;
use super::eval::{evaluer, evaluer_detail, Resultat};
use super::trig::ModeAngle;

fn val(expr: &str, mode: ModeAngle) -> f64 {
    evaluer(expr, mode)
        .valeur()
        .unwrap_or_else(|| panic!("expr={expr:?} [{mode}] => Error"))
}

fn deg(expr: &str) -> f64 {
    val(expr, ModeAngle::Degres)
}

fn assert_proche(a: f64, b: f64, ctx: &str) {
    assert!((a - b).abs() <= 1e-10, "{ctx}: {a} vs {b}");
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Propriétés de référence ------------------------ */

#[test]
fn sci_proprietes_de_reference() {
    assert_eq!(deg("2+2"), 4.0);
    assert_eq!(evaluer("10/0", ModeAngle::Degres), Resultat::Erreur);
    assert_eq!(evaluer("sqrt(-1)", ModeAngle::Degres), Resultat::Erreur);
    assert_proche(deg("sin(90)"), 1.0, "sin(90°)");
    assert_eq!(val("sin(90)", ModeAngle::Radians), 0.8939966636);
    assert_eq!(deg("5!"), 120.0);
    assert_eq!(deg("0!"), 1.0);
    assert_eq!(evaluer("(-5)!", ModeAngle::Degres), Resultat::Erreur);
    assert_eq!(deg("2^3"), 8.0);
}

/* ------------------------ Invariants trig ------------------------ */

#[test]
fn sci_pythagore_degres_et_radians() {
    for x in (-720..=720).step_by(7) {
        let e = format!("sin({x})^2+cos({x})^2");
        assert_eq!(deg(&e), 1.0, "expr={e:?}");
        assert_eq!(val(&e, ModeAngle::Radians), 1.0, "expr={e:?} [RAD]");
    }
}

#[test]
fn sci_periodicite_degres() {
    for x in (-180..=180).step_by(15) {
        let a = deg(&format!("sin({x})"));
        let b = deg(&format!("sin({x}+360)"));
        assert_proche(a, b, &format!("sin({x}) périodique"));

        let a = deg(&format!("cos({x})"));
        let b = deg(&format!("cos({x}-720)"));
        assert_proche(a, b, &format!("cos({x}) périodique"));
    }
}

#[test]
fn sci_reciproques_aller_retour() {
    // asin(sin(x)) = x sur [-90, 90] (degrés) : appels imbriqués
    for x in (-90..=90).step_by(5) {
        assert_eq!(deg(&format!("asin(sin({x}))")), x as f64, "x={x}");
    }
    // atan(tan(x)) = x sur ]-90, 90[
    for x in (-85..=85).step_by(5) {
        assert_eq!(deg(&format!("atan(tan({x}))")), x as f64, "x={x}");
    }
}

#[test]
fn sci_bascule_change_le_resultat() {
    for x in 1..=89 {
        let e = format!("sin({x})");
        let d = val(&e, ModeAngle::Degres);
        let r = val(&e, ModeAngle::Radians);
        assert_ne!(d, r, "expr={e:?} identique dans les deux modes");
    }
    // argument nul : aucune différence
    assert_eq!(deg("sin(0)"), val("sin(0)", ModeAngle::Radians));
    assert_eq!(deg("atan(0)"), val("atan(0)", ModeAngle::Radians));
}

#[test]
fn sci_tan_90_reste_fini() {
    // tan(90°) ne tombe pas exactement sur π/2 : grand mais fini, comme en virgule flottante
    let v = deg("tan(90)");
    assert!(v.abs() > 1e15, "tan(90°) = {v}");
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle_recurrence() {
    for n in 1..=20 {
        let a = deg(&format!("{n}!"));
        let b = n as f64 * deg(&format!("{}!", n - 1));
        assert!((a - b).abs() <= b * 1e-12, "{n}! = {a}, n·(n-1)! = {b}");
    }
}

#[test]
fn sci_factorielle_limites() {
    assert!(deg("170!").is_finite());
    assert_eq!(evaluer("171!", ModeAngle::Degres), Resultat::Erreur);
    assert_eq!(evaluer("1e300!", ModeAngle::Degres), Resultat::Erreur);
    assert_eq!(
        evaluer_detail("0.5!", ModeAngle::Degres),
        Err(ErreurCalc::FactorielleNonEntiere(0.5))
    );
    // (n)! et n! sont équivalents
    assert_eq!(deg("(4)!"), deg("4!"));
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence_affichage() {
    let exprs = [
        "3*3", "1/7", "-1/3", "2/3*3", "sqrt(2)", "ln(10)", "log(2)", "cos(60)", "1e-9",
        "0.1+0.2", "2^40", "-0", "12.5!", "5!/3",
    ];
    for e in exprs {
        let r1 = evaluer(e, ModeAngle::Degres);
        let r2 = evaluer(&r1.affichage(), ModeAngle::Degres);
        assert_eq!(r1, r2, "expr={e:?} affichage={:?}", r1.affichage());
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let e = vec!["1"; HAUTEUR_MAX].join("+");
    assert_eq!(deg(&e), HAUTEUR_MAX as f64);
    budget(t0, max);

    let e = vec!["0.1"; 1000].join("+");
    assert_eq!(deg(&e), 100.0);
    budget(t0, max);
}

#[test]
fn sci_stress_profondeur_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // juste sous la borne : accepté
    let n = PROFONDEUR_MAX - 1;
    let e = format!("{}2{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(deg(&e), 2.0);
    budget(t0, max);

    // au-delà : refus propre, sans débordement de pile
    for e in [
        format!("{}2{}", "(".repeat(100_000), ")".repeat(100_000)),
        format!("{}2", "-".repeat(100_000)),
        vec!["2"; 10_000].join("^"),
        format!("{}1{}", "sqrt(".repeat(10_000), ")".repeat(10_000)),
    ] {
        assert_eq!(
            evaluer_detail(&e, ModeAngle::Degres),
            Err(ErreurCalc::TropProfond(PROFONDEUR_MAX))
        );
        budget(t0, max);
    }

    // chaînes à plat : l’analyse boucle, mais l’arbre serait trop haut
    for e in [
        format!("2{}", "!".repeat(5_000)),
        vec!["1"; 200_000].join("+"),
        vec!["2"; 200_000].join("*"),
        format!("3{}", "!".repeat(200_000)),
    ] {
        assert_eq!(
            evaluer_detail(&e, ModeAngle::Degres),
            Err(ErreurCalc::TropProfond(HAUTEUR_MAX))
        );
        assert_eq!(evaluer(&e, ModeAngle::Degres), Resultat::Erreur);
        budget(t0, max);
    }
}

#[test]
fn sci_constantes_figees_par_les_boutons() {
    // Ce que les touches π / e écrivent, ré-évalué, vaut la constante arrondie
    assert_eq!(deg("3.141592653589793"), deg("π"));
    assert_eq!(deg("2.718281828459045"), deg("e"));
    assert_eq!(deg("2*3.141592653589793"), deg("2*pi"));
}
