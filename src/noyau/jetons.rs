// src/noyau/jetons.rs

use super::erreur::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,
    E, // nombre d’Euler (identifiant isolé "e")

    // Noms de fonctions (le parseur refuse tout ce qui n’est pas une fonction connue)
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^ ou **
    Bang,  // ! (factorielle, postfixe)

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.) avec exposant optionnel (2e3, 1.5E-7)
/// - opérateurs + - * / ^ ** !
/// - × et ÷ (équivalent * et /)
/// - parenthèses ( )
/// - π ou pi, e
/// - identifiants [a-zA-Z]+ (normalisés en minuscules)
/// - √ (équivaut à ident("sqrt"))
///
/// Exposant : un `e` collé à un nombre et suivi d’un chiffre (ou d’un signe puis
/// d’un chiffre) appartient au nombre ; partout ailleurs `e` est la constante.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' | '−' => Some(Tok::Minus),
            '/' | '÷' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '!' => Some(Tok::Bang),
            'π' => Some(Tok::Pi),
            '√' => Some(Tok::Ident("sqrt".to_string())),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // '*' seul = multiplication ; "**" = puissance
        if c == '*' || c == '×' {
            if c == '*' && chars.get(i + 1) == Some(&'*') {
                out.push(Tok::Caret);
                i += 2;
            } else {
                out.push(Tok::Star);
                i += 1;
            }
            continue;
        }

        // Identifiants ASCII : [a-zA-Z]+
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            match w.as_str() {
                "pi" => out.push(Tok::Pi),
                "e" => out.push(Tok::E),
                _ => out.push(Tok::Ident(w)),
            }
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (n, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(n));
            i = fin;
            continue;
        }

        return Err(ErreurCalc::CaractereInattendu { c, pos: i });
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `start`. Retourne (valeur, index de fin).
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize), ErreurCalc> {
    let mut i = start;
    let chiffre = |k: usize| chars.get(k).is_some_and(|c| c.is_ascii_digit());

    while chiffre(i) {
        i += 1;
    }
    let mut a_des_chiffres = i > start;

    if chars.get(i) == Some(&'.') {
        i += 1;
        let debut_frac = i;
        while chiffre(i) {
            i += 1;
        }
        a_des_chiffres |= i > debut_frac;
    }

    // "." seul, ou "1.2.3"
    if !a_des_chiffres || chars.get(i) == Some(&'.') {
        let fin = (i + 1).min(chars.len());
        return Err(ErreurCalc::NombreInvalide(chars[start..fin].iter().collect()));
    }

    // exposant : e3, e+3, e-3 (sinon le 'e' reste à l’appelant)
    if matches!(chars.get(i), Some(&'e') | Some(&'E')) {
        let signe = matches!(chars.get(i + 1), Some(&'+') | Some(&'-'));
        let premier = if signe { i + 2 } else { i + 1 };
        if chiffre(premier) {
            i = premier;
            while chiffre(i) {
                i += 1;
            }
        }
    }

    let txt: String = chars[start..i].iter().collect();
    let n = txt
        .parse::<f64>()
        .map_err(|_| ErreurCalc::NombreInvalide(txt.clone()))?;
    Ok((n, i))
}

/// Format utilitaire (journalisation) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),
            Tok::Pi => "π".to_string(),
            Tok::E => "e".to_string(),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Bang => "!".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
