use super::*;
use hubfee_entities::estimate::DeliveryEstimate;

impl From<&DeliveryEstimate> for DistanceResult {
    fn from(from: &DeliveryEstimate) -> Self {
        let DeliveryEstimate { km, fee, .. } = from;
        Self {
            km: *km,
            fee: fee.amount(),
        }
    }
}

impl<'a> FromIterator<&'a DeliveryEstimate> for Report {
    fn from_iter<I: IntoIterator<Item = &'a DeliveryEstimate>>(iter: I) -> Self {
        let mut report = Report::new();
        for estimate in iter {
            report.insert(estimate.district.clone(), estimate.into());
        }
        report
    }
}
