//! Column names the query reads

pub const C_CUSTKEY: &str = "c_custkey";
pub const C_NATIONKEY: &str = "c_nationkey";

pub const O_ORDERKEY: &str = "o_orderkey";
pub const O_CUSTKEY: &str = "o_custkey";
pub const O_ORDERDATE: &str = "o_orderdate";

pub const L_ORDERKEY: &str = "l_orderkey";
pub const L_SUPPKEY: &str = "l_suppkey";
pub const L_EXTENDEDPRICE: &str = "l_extendedprice";
pub const L_DISCOUNT: &str = "l_discount";

pub const S_SUPPKEY: &str = "s_suppkey";
pub const S_NATIONKEY: &str = "s_nationkey";

pub const N_NATIONKEY: &str = "n_nationkey";
pub const N_NAME: &str = "n_name";
pub const N_REGIONKEY: &str = "n_regionkey";

pub const R_REGIONKEY: &str = "r_regionkey";
pub const R_NAME: &str = "r_name";
