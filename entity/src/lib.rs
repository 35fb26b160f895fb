//! SeaORM entities for the OKR tables read by the reporting service.

pub mod prelude;

pub mod company_settings;
pub mod key_result;
pub mod objective;
pub mod okr_user;
pub mod team;
