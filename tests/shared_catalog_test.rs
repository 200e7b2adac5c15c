//! The process-wide catalog is loaded once and then reused

mod utils;

use std::path::Path;
use std::sync::Arc;

use symptom_matcher::{predict_diseases, shared_catalog};
use utils::{SAMPLE_CSV, write_csv};

#[test]
fn test_shared_catalog_initialised_once() {
    // A failed load leaves the catalog uninitialised
    assert!(shared_catalog(Path::new("/no/such/catalog.csv")).is_err());

    let file = write_csv(SAMPLE_CSV);
    let first = shared_catalog(file.path()).unwrap();
    assert_eq!(first.len(), 3);

    // Later calls reuse the loaded catalog, whatever path they name
    let second = shared_catalog(Path::new("/ignored.csv")).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let results = predict_diseases("headache, nausea", 5, 0.0).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "migraine");
    assert!(results[0].exact);
}
