use clap::Parser;
use enumset::EnumSet;

use crate::core::{ApplianceKind, HousingSize, Profile, PropertyType};

#[derive(Parser)]
pub struct ProfileArgs {
    /// Full name, for the record only.
    #[clap(long, default_value = "")]
    pub name: String,

    /// Age in years.
    #[clap(long, default_value = "25", value_parser = clap::value_parser!(u8).range(1..=100))]
    pub age: u8,

    /// City of residence.
    #[clap(long, default_value = "")]
    pub city: String,

    /// Area or neighbourhood within the city.
    #[clap(long, default_value = "")]
    pub area: String,

    /// Property type, does not affect the estimate.
    #[clap(long, default_value = "flat")]
    pub property_type: PropertyType,

    /// Housing size.
    #[clap(long)]
    pub size: HousingSize,

    /// Appliances in use, comma-separated.
    #[clap(long, value_delimiter = ',', num_args = 1..)]
    pub appliances: Vec<ApplianceKind>,
}

impl ProfileArgs {
    #[must_use]
    pub fn appliances(&self) -> EnumSet<ApplianceKind> {
        self.appliances.iter().copied().collect()
    }

    pub fn into_profile(self) -> Profile {
        let appliances = self.appliances();
        Profile::builder()
            .name(self.name)
            .age(self.age)
            .city(self.city)
            .area(self.area)
            .property_type(self.property_type)
            .size(self.size)
            .appliances(appliances)
            .build()
    }
}
