#[cfg(test)]
use fake::{faker::address::en::CityName, Fake};

#[cfg(test)]
use crate::features::dataset::models::{Lga, Region, RegionRecord, State};
#[cfg(test)]
use crate::features::dataset::RawDataset;

#[cfg(test)]
pub fn state(name: &str, capital: &str, code: &str, region: Region) -> State {
    State {
        name: name.to_string(),
        capital: capital.to_string(),
        code: code.to_string(),
        region,
    }
}

#[cfg(test)]
pub fn lga(name: &str, state_code: &str) -> Lga {
    Lga {
        name: name.to_string(),
        state_code: state_code.to_string(),
    }
}

/// Small hand-written hierarchy with one LGA name shared by two states
#[cfg(test)]
pub fn sample_dataset() -> RawDataset {
    RawDataset {
        regions: vec![
            RegionRecord {
                name: Region::SouthWest,
                description: "Predominantly Yoruba-speaking southwestern states".to_string(),
            },
            RegionRecord {
                name: Region::NorthWest,
                description: "Northwestern states with largest land area".to_string(),
            },
        ],
        states: vec![
            state("Kano", "Kano", "KN", Region::NorthWest),
            state("Lagos", "Ikeja", "LA", Region::SouthWest),
            state("Oyo", "Ibadan", "OY", Region::SouthWest),
        ],
        lgas: vec![
            lga("Dala", "KN"),
            lga("Nasarawa", "KN"),
            lga("Agege", "LA"),
            lga("Ikeja", "LA"),
            lga("Surulere", "LA"),
            lga("Ibadan North", "OY"),
            lga("Surulere", "OY"),
        ],
    }
}

/// Synthetic hierarchy with generated names, regions assigned round-robin
#[cfg(test)]
pub fn fake_dataset(state_count: usize, lgas_per_state: usize) -> RawDataset {
    assert!(state_count <= 26 * 26, "two-letter codes run out");

    let mut states = Vec::with_capacity(state_count);
    let mut lgas = Vec::with_capacity(state_count * lgas_per_state);

    for i in 0..state_count {
        let code = format!("{}{}", (b'A' + (i / 26) as u8) as char, (b'A' + (i % 26) as u8) as char);
        let capital: String = CityName().fake();
        let region = Region::ALL[i % Region::ALL.len()];
        states.push(state(&format!("Synthetic State {}", i), &capital, &code, region));

        for j in 0..lgas_per_state {
            let name: String = CityName().fake();
            lgas.push(lga(&format!("{} {}", name, j), &code));
        }
    }

    RawDataset {
        regions: Vec::new(),
        states,
        lgas,
    }
}
