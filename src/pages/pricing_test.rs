use super::*;

fn plan(interval: &str) -> Plan {
    Plan {
        id: 1,
        name: "Pro".to_owned(),
        price: 4999.0,
        currency: "ars".to_owned(),
        interval: interval.to_owned(),
        description: None,
    }
}

#[test]
fn price_label_adds_known_interval() {
    assert_eq!(price_label(&plan("month")), "ARS 4.999,00 / mes");
    assert_eq!(price_label(&plan("ANUAL")), "ARS 4.999,00 / año");
}

#[test]
fn price_label_omits_unknown_interval() {
    assert_eq!(price_label(&plan("")), "ARS 4.999,00");
}
