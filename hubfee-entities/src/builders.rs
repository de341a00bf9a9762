pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::zone_builder::*;

pub mod zone_builder {

    use super::*;
    use crate::{district::*, fee::*};

    #[derive(Debug)]
    pub struct ZoneBuild {
        zone: Zone,
    }

    impl ZoneBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.zone.name = name.into();
            self
        }
        pub fn fee(mut self, fee: u32) -> Self {
            self.zone.fee = Fee::new(fee);
            self
        }
        pub fn neighborhoods(mut self, neighborhoods: Vec<impl Into<String>>) -> Self {
            self.zone.neighborhoods = neighborhoods.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Zone {
            self.zone
        }
    }

    impl Builder for Zone {
        type Build = ZoneBuild;
        fn build() -> ZoneBuild {
            ZoneBuild {
                zone: Zone {
                    name: "zone".into(),
                    fee: Fee::new(0),
                    neighborhoods: vec![],
                },
            }
        }
    }
}
