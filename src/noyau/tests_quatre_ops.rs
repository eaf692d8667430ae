//! Tests quatre opérations (campagne) : la table de propriétés du noyau.
//!
//! But : verrouiller le contrat observable de `calculer`.
//! - précédence et parenthèses
//! - unaire de tête (0 implicite)
//! - toutes les causes d'erreur, repliées en étiquette unique
//! - arrondi d'affichage (artefacts flottants)
//! - formes décimales limites (".5" et "5.", politique figée ici)

use super::{calculer, eval_expression, format_resultat, Erreur, ErreurCalc};

fn ok(expr: &str) -> f64 {
    calculer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_erreur(expr: &str) {
    assert_eq!(calculer(expr), Err(Erreur), "expr={expr:?}");
}

fn assert_affiche(expr: &str, attendu: &str) {
    assert_eq!(format_resultat(ok(expr)), attendu, "expr={expr:?}");
}

/* ------------------------ Précédence & parenthèses ------------------------ */

#[test]
fn ops_precedence_de_base() {
    assert_eq!(ok("2+3*4"), 14.0);
    assert_eq!(ok("(2+3)*4"), 20.0);
}

#[test]
fn ops_precedence_division() {
    assert_eq!(ok("10-6/2"), 7.0);
    assert_eq!(ok("(10-6)/2"), 2.0);
}

#[test]
fn ops_parentheses_imbriquees() {
    assert_eq!(ok("((2+3)*(4-1))"), 15.0);
    assert_eq!(ok("(1+(2*(3+4)))"), 15.0);
}

#[test]
fn ops_associativite_gauche() {
    assert_eq!(ok("8-3-2"), 3.0);
    assert_eq!(ok("8/4/2"), 1.0);
    assert_eq!(ok("100/10*2"), 20.0);
}

/* ------------------------ Unaire de tête ------------------------ */

#[test]
fn ops_moins_unaire() {
    assert_eq!(ok("-5+2"), -3.0);
    assert_eq!(ok("-5"), -5.0);
    assert_eq!(ok("-0.5*4"), -2.0);
}

#[test]
fn ops_plus_unaire() {
    assert_eq!(ok("+5-2"), 3.0);
    assert_eq!(ok("+5"), 5.0);
}

/* ------------------------ Erreurs (repliées) ------------------------ */

#[test]
fn ops_division_par_zero() {
    assert_erreur("5/0");
    assert_erreur("1/(2-2)");
}

#[test]
fn ops_parentheses_desequilibrees() {
    assert_erreur("(2+3");
    assert_erreur("2+3)");
    assert_erreur("((1+2)");
}

#[test]
fn ops_mal_formees() {
    assert_erreur("2+");
    assert_erreur("2*/3");
    assert_erreur("2 3");
}

#[test]
fn ops_entree_vide_ou_illisible() {
    assert_erreur("");
    assert_erreur("   ");
    assert_erreur("abc");
}

#[test]
fn ops_cause_preservee_en_diagnostic() {
    // la variante riche distingue ce que la façade replie
    assert_eq!(eval_expression("5/0"), Err(ErreurCalc::DivisionParZero));
    assert_eq!(
        eval_expression("(2+3"),
        Err(ErreurCalc::ParenthesesDesequilibrees)
    );
    assert_eq!(eval_expression(""), Err(ErreurCalc::ExpressionInvalide));
    assert_eq!(eval_expression("2+"), Err(ErreurCalc::ExpressionMalFormee));
}

/* ------------------------ Arrondi d'affichage ------------------------ */

#[test]
fn ops_arrondi_artefacts() {
    assert_affiche("0.1+0.2", "0.3");
    assert_affiche("0.3-0.1", "0.2");
}

#[test]
fn ops_arrondi_huit_decimales() {
    // 1/3 a une écriture infinie: coupée à 8 décimales
    assert_affiche("1/3", "0.33333333");
    assert_affiche("2/3", "0.66666667");
}

#[test]
fn ops_pas_d_arrondi_inutile() {
    assert_affiche("1/8", "0.125");
    assert_affiche("5/2", "2.5");
}

/* ------------------------ Formes décimales limites ------------------------ */

#[test]
fn point_initial_accepte() {
    assert_eq!(ok(".5+.5"), 1.0);
}

#[test]
fn point_final_accepte() {
    // politique figée: "5." se lit 5
    assert_eq!(ok("5.+5"), 10.0);
    assert_eq!(ok("5."), 5.0);
}

#[test]
fn ops_caracteres_etrangers_ignores() {
    // contrat permissif: "2a+3" devient "2+3" (voir DESIGN.md)
    assert_eq!(ok("2a+3"), 5.0);
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn ops_idempotence() {
    let entrees = ["2+3*4", "(2+3)*4", "0.1+0.2", "5/0", "-5+2"];
    for entree in entrees {
        let premier = calculer(entree);
        for _ in 0..5 {
            assert_eq!(calculer(entree), premier, "entrée: {entree:?}");
        }
    }
}
