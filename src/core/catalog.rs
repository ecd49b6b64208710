use crate::models::{Destination, TagCard};

/// Tag cards in declaration order: (id, label, image)
const TAG_CARDS: &[(&str, &str, &str)] = &[
    // vibe / landscape
    ("beach", "Beach", "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=1200&auto=format&fit=crop"),
    ("mountains", "Mountains", "https://images.unsplash.com/photo-1509644851169-2acc08aa25b8?q=80&w=1200&auto=format&fit=crop"),
    ("city", "City", "https://images.unsplash.com/photo-1494526585095-c41746248156?q=80&w=1200&auto=format&fit=crop"),
    ("countryside", "Countryside", "https://images.unsplash.com/photo-1477414348463-c0eb7f1359b6?q=80&w=1200&auto=format&fit=crop"),
    ("desert", "Desert", "https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=1200&auto=format&fit=crop"),
    ("tropical", "Tropical", "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?q=80&w=1200&auto=format&fit=crop"),
    ("arctic", "Arctic", "https://images.unsplash.com/photo-1476610182048-b716b8518aae?q=80&w=1200&auto=format&fit=crop"),
    // trip styles
    ("adventure", "Adventure", "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?q=80&w=1200&auto=format&fit=crop"),
    ("relaxation", "Relaxation", "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=1200&auto=format&fit=crop"),
    ("culture", "Culture", "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?q=80&w=1200&auto=format&fit=crop"),
    ("nightlife", "Nightlife", "https://images.unsplash.com/photo-1533236897111-3e94666b2edf?q=80&w=1200&auto=format&fit=crop"),
    ("food", "Food", "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1200&auto=format&fit=crop"),
    // budget / comfort
    ("luxury", "Luxury", "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?q=80&w=1200&auto=format&fit=crop"),
    ("budget", "Budget", "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?q=80&w=1200&auto=format&fit=crop"),
    // climate
    ("warm", "Warm", "https://images.unsplash.com/photo-1502082553048-f009c37129b9?q=80&w=1200&auto=format&fit=crop"),
    ("mild", "Mild", "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?q=80&w=1200&auto=format&fit=crop"),
    ("cold", "Cold", "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1200&auto=format&fit=crop"),
];

struct DestinationSeed {
    name: &'static str,
    country: &'static str,
    tags: &'static [&'static str],
    image: &'static str,
    airport: &'static str,
    city: &'static str,
}

const DESTINATIONS: &[DestinationSeed] = &[
    DestinationSeed {
        name: "Bali",
        country: "Indonesia",
        tags: &["beach", "tropical", "relaxation", "warm", "food"],
        image: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1400&auto=format&fit=crop",
        airport: "DPS",
        city: "Bali",
    },
    DestinationSeed {
        name: "Kyoto",
        country: "Japan",
        tags: &["culture", "food", "mild", "city"],
        image: "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1400&auto=format&fit=crop",
        airport: "KIX",
        city: "Kyoto",
    },
    DestinationSeed {
        name: "Reykjavík",
        country: "Iceland",
        tags: &["arctic", "adventure", "cold", "mountains"],
        image: "https://images.unsplash.com/photo-1500043357865-c6b8827edfbe?q=80&w=1400&auto=format&fit=crop",
        airport: "KEF",
        city: "Reykjavik",
    },
    DestinationSeed {
        name: "Paris",
        country: "France",
        tags: &["city", "culture", "food", "nightlife", "mild"],
        image: "https://images.unsplash.com/photo-1508057198894-247b23fe5ade?q=80&w=1400&auto=format&fit=crop",
        airport: "CDG",
        city: "Paris",
    },
    DestinationSeed {
        name: "Marrakech",
        country: "Morocco",
        tags: &["desert", "warm", "culture", "food"],
        image: "https://images.unsplash.com/photo-1544989164-31dc3c645987?q=80&w=1400&auto=format&fit=crop",
        airport: "RAK",
        city: "Marrakech",
    },
    DestinationSeed {
        name: "Queenstown",
        country: "New Zealand",
        tags: &["mountains", "adventure", "mild"],
        image: "https://images.unsplash.com/photo-1477414348463-c0eb7f1359b6?q=80&w=1400&auto=format&fit=crop",
        airport: "ZQN",
        city: "Queenstown",
    },
    DestinationSeed {
        name: "Bangkok",
        country: "Thailand",
        tags: &["city", "food", "nightlife", "warm", "budget"],
        image: "https://images.unsplash.com/photo-1506973035872-a4ec16b8e8d9?q=80&w=1400&auto=format&fit=crop",
        airport: "BKK",
        city: "Bangkok",
    },
    DestinationSeed {
        name: "Amalfi Coast",
        country: "Italy",
        tags: &["beach", "relaxation", "mild", "food"],
        image: "https://images.unsplash.com/photo-1504730653930-b9a2f0f4b3c8?q=80&w=1400&auto=format&fit=crop",
        airport: "NAP",
        city: "Amalfi",
    },
    DestinationSeed {
        name: "Cusco",
        country: "Peru",
        tags: &["adventure", "mountains", "culture"],
        image: "https://images.unsplash.com/photo-1508261303786-0e3b4e42a4ea?q=80&w=1400&auto=format&fit=crop",
        airport: "CUZ",
        city: "Cusco",
    },
    DestinationSeed {
        name: "New York",
        country: "USA",
        tags: &["city", "nightlife", "food", "luxury"],
        image: "https://images.unsplash.com/photo-1467269204594-9661b134dd2b?q=80&w=1400&auto=format&fit=crop",
        airport: "JFK",
        city: "New York",
    },
];

/// Read-only tag and destination catalog
///
/// Built once at startup and shared by reference. Declaration order is kept
/// for both lists: the choice fallback and ranking ties depend on it.
#[derive(Debug, Clone)]
pub struct Catalog {
    tags: Vec<TagCard>,
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn new(tags: Vec<TagCard>, destinations: Vec<Destination>) -> Self {
        Self { tags, destinations }
    }

    /// The built-in travel catalog
    pub fn builtin() -> Self {
        let tags = TAG_CARDS
            .iter()
            .map(|(id, label, image)| TagCard {
                id: id.to_string(),
                label: label.to_string(),
                image: image.to_string(),
            })
            .collect();

        let destinations = DESTINATIONS
            .iter()
            .map(|seed| Destination {
                name: seed.name.to_string(),
                country: seed.country.to_string(),
                image: seed.image.to_string(),
                tags: seed.tags.iter().map(|t| t.to_string()).collect(),
                airport_code: seed.airport.to_string(),
                city: seed.city.to_string(),
            })
            .collect();

        Self::new(tags, destinations)
    }

    pub fn tags(&self) -> &[TagCard] {
        &self.tags
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Look up a tag card by id
    pub fn tag(&self, id: &str) -> Option<&TagCard> {
        self.tags.iter().find(|card| card.id == id)
    }

    #[inline]
    pub fn contains_tag(&self, id: &str) -> bool {
        self.tag(id).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
