//! Multiplier selection logic.

use std::sync::Arc;

use matcalc_core::registry::MultiplierFactory;
use matcalc_core::{MatrixError, Multiplier};

/// Get multipliers to run based on algorithm selection.
///
/// Accepts `all`, a single name, or a comma-separated list of names.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, MatrixError> {
    match algo.trim() {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        list => list
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(|name| factory.get(name))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|mults| {
                if mults.is_empty() {
                    Err(MatrixError::Config("no algorithm selected".into()))
                } else {
                    Ok(mults)
                }
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcalc_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let mults = get_multipliers_to_run("all", &factory).unwrap();
        let names: Vec<&str> = mults.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Classical", "NaiveDC", "Strassen"]);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let mults = get_multipliers_to_run("strassen", &factory).unwrap();
        assert_eq!(mults.len(), 1);
        assert_eq!(mults[0].name(), "Strassen");
    }

    #[test]
    fn select_list() {
        let factory = DefaultFactory::new();
        let mults = get_multipliers_to_run("classical, strassen", &factory).unwrap();
        assert_eq!(mults.len(), 2);
        assert_eq!(mults[1].name(), "Strassen");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        assert!(get_multipliers_to_run("unknown", &factory).is_err());
        assert!(get_multipliers_to_run("classical,unknown", &factory).is_err());
    }

    #[test]
    fn select_empty() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            get_multipliers_to_run(" , ", &factory),
            Err(MatrixError::Config(_))
        ));
    }
}
