use crate::ids;
use crate::models::{Power, Source};

/// (source label, [(power label, status)])
static CATALOG: &[(&str, &[(&str, bool)])] = &[
    ("Luzes", &[("Sala", true), ("Cozinha", true), ("Quarto", false)]),
    ("Geladeira", &[("Geladeira", true)]),
    ("TV's", &[("TV da Sala", true), ("TV do Quarto", false)]),
    ("Outros", &[("Ventilador", false), ("Cafeteira", false)]),
];

/// Build the startup catalog with freshly generated ids.
pub fn seed_sources() -> Vec<Source> {
    CATALOG
        .iter()
        .map(|(label, powers)| Source {
            id: ids::generate(),
            label: label.to_string(),
            powers: powers
                .iter()
                .map(|(label, status)| Power {
                    id: ids::generate(),
                    label: label.to_string(),
                    status: *status,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeds_four_sources_in_fixed_order() {
        let labels: Vec<String> = seed_sources().into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Luzes", "Geladeira", "TV's", "Outros"]);
    }

    #[test]
    fn seeded_active_amounts() {
        let amounts: Vec<usize> = seed_sources().iter().map(|s| s.active_amount()).collect();
        assert_eq!(amounts, vec![2, 1, 1, 0]);
    }

    #[test]
    fn seeded_ids_are_unique() {
        let sources = seed_sources();
        let source_ids: HashSet<&str> = sources.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(source_ids.len(), sources.len());

        for source in &sources {
            let power_ids: HashSet<&str> = source.powers.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(power_ids.len(), source.powers.len());
        }
    }
}
