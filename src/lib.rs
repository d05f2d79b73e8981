//! tpchq5 - parallel in-memory revenue-by-nation query
//!
//! For one region and one order-date range, computes total revenue per
//! supplier nation over six in-memory tables (customer, orders, lineitem,
//! supplier, nation, region), joining each order on its own and spreading
//! orders across worker threads.

pub mod cli;
pub mod executor;
pub mod index;
pub mod observability;
pub mod storage;
