// handlers/mod.rs - HTTP handlers
//
// case_laws: the read API over case law records (/api/case-laws/*)
// system:    service index, liveness and connectivity probes, route fallback
pub mod case_laws;
pub mod system;
