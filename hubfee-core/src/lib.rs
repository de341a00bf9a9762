pub mod gateways;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use hubfee_entities::{district::*, estimate::*, fee::*, geo::*};
}
