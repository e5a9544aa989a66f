//! Thin I/O glue: dataset parsing and result emission. The intellectual
//! content of this system lives in `as_graph`; everything here is format
//! handling around it.

pub mod announcements;
pub mod relationships;
pub mod rib_csv;
pub mod rov_asns;
