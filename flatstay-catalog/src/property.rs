use serde::{Deserialize, Serialize};

/// A serviced-apartment property containing multiple flats
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Apartment {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub address: String,
    pub amenities: Vec<String>,
}

/// A category of flat defining capacity, price, and features
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlatType {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub max_guests: u32,
    /// Nightly rate in cents
    pub base_price_cents: i32,
    pub features: Vec<String>,
}

/// An individually bookable unit within an apartment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flat {
    pub id: u32,
    pub apartment_id: u32,
    pub flat_type_id: u32,
    pub floor: u32,
    pub room_number: String,
    /// Legacy maintenance flag; booking conflicts are decided by the
    /// ledger's date-overlap scan, never by this field.
    pub is_available: bool,
}

/// Read-only registry of apartments, flat types, and flats.
///
/// Seeded once at startup; collections keep insertion order so filter
/// results are deterministic. Lookups are linear scans, which is fine at
/// this inventory size (dozens of entries).
#[derive(Debug)]
pub struct Catalog {
    apartments: Vec<Apartment>,
    flat_types: Vec<FlatType>,
    flats: Vec<Flat>,
}

impl Catalog {
    /// Build a catalog, validating that every flat references an existing
    /// apartment and flat type.
    pub fn new(
        apartments: Vec<Apartment>,
        flat_types: Vec<FlatType>,
        flats: Vec<Flat>,
    ) -> Result<Self, CatalogError> {
        for flat in &flats {
            if !apartments.iter().any(|a| a.id == flat.apartment_id) {
                return Err(CatalogError::UnknownApartment {
                    flat_id: flat.id,
                    apartment_id: flat.apartment_id,
                });
            }
            if !flat_types.iter().any(|t| t.id == flat.flat_type_id) {
                return Err(CatalogError::UnknownFlatType {
                    flat_id: flat.id,
                    flat_type_id: flat.flat_type_id,
                });
            }
        }

        Ok(Self {
            apartments,
            flat_types,
            flats,
        })
    }

    /// Get an apartment by id
    pub fn apartment(&self, id: u32) -> Option<&Apartment> {
        self.apartments.iter().find(|a| a.id == id)
    }

    /// Get a flat type by id
    pub fn flat_type(&self, id: u32) -> Option<&FlatType> {
        self.flat_types.iter().find(|t| t.id == id)
    }

    /// Get a flat by id
    pub fn flat(&self, id: u32) -> Option<&Flat> {
        self.flats.iter().find(|f| f.id == id)
    }

    /// All flats belonging to an apartment, in insertion order
    pub fn flats_by_apartment(&self, apartment_id: u32) -> Vec<&Flat> {
        self.flats
            .iter()
            .filter(|f| f.apartment_id == apartment_id)
            .collect()
    }

    /// All flats of a given type, in insertion order
    pub fn flats_by_type(&self, flat_type_id: u32) -> Vec<&Flat> {
        self.flats
            .iter()
            .filter(|f| f.flat_type_id == flat_type_id)
            .collect()
    }

    pub fn apartments(&self) -> &[Apartment] {
        &self.apartments
    }

    pub fn flat_types(&self) -> &[FlatType] {
        &self.flat_types
    }

    pub fn flats(&self) -> &[Flat] {
        &self.flats
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Flat {flat_id} references unknown apartment {apartment_id}")]
    UnknownApartment { flat_id: u32, apartment_id: u32 },

    #[error("Flat {flat_id} references unknown flat type {flat_type_id}")]
    UnknownFlatType { flat_id: u32, flat_type_id: u32 },
}
