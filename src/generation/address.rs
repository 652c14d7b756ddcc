use rand::Rng;

use crate::domain::LocationHeader;
use crate::generation::names::place_name;
use crate::generation::region::Region;
use crate::generation::vocabulary::{pick, pick_settlement};

/// Cosmetic street address for the queried point. Not a geocoder.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticAddress {
    pub address: String,
    pub city: String,
    pub state: String,
}

/// "<1..=99>, <area> Road, Near <landmark>", with city and state drawn from
/// the settlement stems and the regional state list.
pub fn generate_address<R: Rng + ?Sized>(rng: &mut R, region: Region) -> SyntheticAddress {
    let vocabulary = region.vocabulary();
    let state = pick(rng, vocabulary.states);
    let city = pick_settlement(rng);
    let area_name = place_name(rng, vocabulary);
    // area is the first word of a synthesized place name
    let area = area_name.split(' ').next().unwrap_or(&area_name);
    let street_number: u32 = rng.gen_range(1..=99);
    let landmark = place_name(rng, vocabulary);

    SyntheticAddress {
        address: format!("{}, {} Road, Near {}", street_number, area, landmark),
        city: city.to_string(),
        state: state.to_string(),
    }
}

impl SyntheticAddress {
    pub fn into_header(self, latitude: f64, longitude: f64, region: Region) -> LocationHeader {
        LocationHeader {
            latitude,
            longitude,
            address: self.address,
            city: self.city,
            state: self.state,
            region: Some(region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::vocabulary::{SETTLEMENT_STEMS, SOUTH};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_address_shape() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..50 {
            let address = generate_address(&mut rng, Region::South);
            assert!(SOUTH.states.contains(&address.state.as_str()));
            assert!(SETTLEMENT_STEMS.contains(&address.city.as_str()));

            let (number, rest) = address.address.split_once(", ").unwrap();
            let number: u32 = number.parse().unwrap();
            assert!((1..=99).contains(&number));
            assert!(rest.contains(" Road, Near "), "{}", address.address);
        }
    }

    #[test]
    fn test_into_header_keeps_query_point() {
        let mut rng = StdRng::seed_from_u64(10);
        let header = generate_address(&mut rng, Region::West).into_header(19.07, 72.87, Region::West);
        assert_eq!(header.latitude, 19.07);
        assert_eq!(header.longitude, 72.87);
        assert_eq!(header.region, Some(Region::West));
    }
}
