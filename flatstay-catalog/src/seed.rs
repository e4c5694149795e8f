use crate::property::{Apartment, Catalog, Flat, FlatType};

/// Build the seeded inventory: 3 apartments, 4 flat types, 60 flats.
///
/// The inventory is fixed for the process lifetime; each apartment has
/// 20 flats over 5 floors with 4 rooms per floor.
pub fn seed_catalog() -> Catalog {
    Catalog::new(apartments(), flat_types(), flats())
        .expect("seed inventory references are valid")
}

fn apartments() -> Vec<Apartment> {
    vec![
        Apartment {
            id: 1,
            name: "Royal Heights".to_string(),
            description: "Luxury service apartment with premium amenities in the heart of the city.".to_string(),
            address: "123 Royal Street, Downtown District".to_string(),
            amenities: strings(&[
                "24/7 Concierge",
                "Fitness Center",
                "Swimming Pool",
                "Spa",
                "Business Center",
                "Parking",
                "WiFi",
            ]),
        },
        Apartment {
            id: 2,
            name: "Garden View Residences".to_string(),
            description: "Modern apartments with beautiful garden views and family-friendly facilities.".to_string(),
            address: "456 Garden Avenue, Green Valley".to_string(),
            amenities: strings(&[
                "Garden Views",
                "Children's Play Area",
                "BBQ Area",
                "Laundry Service",
                "Parking",
                "WiFi",
                "Pet-Friendly",
            ]),
        },
        Apartment {
            id: 3,
            name: "Metropolitan Suites".to_string(),
            description: "Contemporary urban living with sophisticated design and premium location.".to_string(),
            address: "789 Metro Boulevard, Business District".to_string(),
            amenities: strings(&[
                "City Views",
                "Rooftop Terrace",
                "Conference Room",
                "Gym",
                "Restaurant",
                "Valet Parking",
                "WiFi",
            ]),
        },
    ]
}

fn flat_types() -> Vec<FlatType> {
    vec![
        FlatType {
            id: 1,
            name: "Studio".to_string(),
            description: "Compact and efficient studio apartment perfect for solo travelers or couples.".to_string(),
            max_guests: 2,
            base_price_cents: 12000,
            features: strings(&[
                "Queen Bed",
                "Kitchenette",
                "Private Bathroom",
                "Work Desk",
                "Smart TV",
                "Air Conditioning",
            ]),
        },
        FlatType {
            id: 2,
            name: "1 Bedroom".to_string(),
            description: "Spacious one-bedroom apartment with separate living area and full kitchen.".to_string(),
            max_guests: 3,
            base_price_cents: 18000,
            features: strings(&[
                "King Bed",
                "Living Room",
                "Full Kitchen",
                "Dining Area",
                "Private Bathroom",
                "Balcony",
                "Smart TV",
                "Air Conditioning",
            ]),
        },
        FlatType {
            id: 3,
            name: "2 Bedroom".to_string(),
            description: "Large two-bedroom apartment ideal for families or business travelers.".to_string(),
            max_guests: 5,
            base_price_cents: 28000,
            features: strings(&[
                "2 Bedrooms",
                "2 Bathrooms",
                "Living Room",
                "Full Kitchen",
                "Dining Area",
                "Balcony",
                "2 Smart TVs",
                "Air Conditioning",
                "Washer/Dryer",
            ]),
        },
        FlatType {
            id: 4,
            name: "Penthouse Suite".to_string(),
            description: "Luxurious penthouse with panoramic views and premium amenities.".to_string(),
            max_guests: 6,
            base_price_cents: 45000,
            features: strings(&[
                "3 Bedrooms",
                "3 Bathrooms",
                "Large Living Room",
                "Gourmet Kitchen",
                "Private Terrace",
                "City Views",
                "Premium Furnishing",
                "Butler Service",
            ]),
        },
    ]
}

fn flats() -> Vec<Flat> {
    let mut flats = Vec::with_capacity(60);
    let mut flat_id = 1;

    for apartment_id in 1..=3 {
        for floor in 1..=5 {
            for room in 1..=4 {
                flats.push(Flat {
                    id: flat_id,
                    apartment_id,
                    flat_type_id: flat_type_for(flat_id),
                    floor,
                    room_number: format!("{floor}0{room}"),
                    is_available: true,
                });
                flat_id += 1;
            }
        }
    }

    flats
}

/// Flat-type mix per apartment, keyed on the global flat id.
///
/// Royal Heights: 5 studios, 8 one-bedrooms, 6 two-bedrooms, 1 penthouse.
/// Garden View: 6 studios, 10 one-bedrooms, 4 two-bedrooms.
/// Metropolitan: 4 studios, 8 one-bedrooms, 6 two-bedrooms, 2 penthouses.
fn flat_type_for(flat_id: u32) -> u32 {
    match flat_id {
        1..=5 => 1,
        6..=13 => 2,
        14..=19 => 3,
        20 => 4,
        21..=26 => 1,
        27..=36 => 2,
        37..=40 => 3,
        41..=44 => 1,
        45..=52 => 2,
        53..=58 => 3,
        _ => 4,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
