//! The Guanches: North Africa's island cousins and their erasure.

use lions_core::{
    CameraTarget, Category, CategoryInfo, ContentStore, EntryId, GeoBounds, GeoPoint, GeoRoute,
    LngLat, RepeatSelect,
};

use super::Story;

const SACRED: Category = Category("sacred");
const RESISTANCE: Category = Category("resistance");
const TRACE: Category = Category("trace");

static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: SACRED, label: "Sacred places", color: "#4e9a8f" },
    CategoryInfo { key: RESISTANCE, label: "Conquest & resistance", color: "#b3541e" },
    CategoryInfo { key: TRACE, label: "Surviving traces", color: "#d4a24e" },
];

static POINTS: &[GeoPoint] = &[
    GeoPoint {
        id: EntryId("teide"),
        name: "Mount Teide",
        coords: LngLat::new(-16.64, 28.27),
        category: SACRED,
        year: None,
        detail: "Echeyde, seat of the demon Guayota in Guanche belief; Spain's highest mountain anchored the islanders' cosmology.",
    },
    GeoPoint {
        id: EntryId("candelaria"),
        name: "Candelaria",
        coords: LngLat::new(-16.37, 28.35),
        category: SACRED,
        year: Some(1392),
        detail: "A Marian statue washes ashore a century before conquest; the Guanches venerate it first, and nine bronze menceyes now guard its basilica.",
    },
    GeoPoint {
        id: EntryId("acentejo"),
        name: "Barranco de Acentejo",
        coords: LngLat::new(-16.47, 28.44),
        category: RESISTANCE,
        year: Some(1494),
        detail: "Mencey Bencomo's warriors ambush the Castilian column in a ravine and destroy most of it, the conquest's worst defeat.",
    },
    GeoPoint {
        id: EntryId("la-laguna"),
        name: "La Laguna",
        coords: LngLat::new(-16.31, 28.48),
        category: RESISTANCE,
        year: Some(1496),
        detail: "Two years and one epidemic later the surviving menceyes surrender here; Tenerife is the last island to fall.",
    },
    GeoPoint {
        id: EntryId("galdar"),
        name: "Gáldar, Cueva Pintada",
        coords: LngLat::new(-15.65, 28.14),
        category: TRACE,
        year: Some(1862),
        detail: "A farmer breaks into a chamber painted with geometric friezes, the finest surviving canvas of pre-conquest Canarian art.",
    },
    GeoPoint {
        id: EntryId("tindaya"),
        name: "Tindaya",
        coords: LngLat::new(-14.11, 28.59),
        category: SACRED,
        year: None,
        detail: "A bare mountain on Fuerteventura carved with nearly three hundred podomorphs, foot-shaped engravings facing the Moroccan coast.",
    },
    GeoPoint {
        id: EntryId("garajonay"),
        name: "Garajonay, La Gomera",
        coords: LngLat::new(-17.24, 28.13),
        category: TRACE,
        year: None,
        detail: "The island's whistled language, Silbo Gomero, still jumps these laurel-forest ravines; it is the archipelago's loudest living inheritance.",
    },
];

static ROUTES: &[GeoRoute] = &[GeoRoute {
    id: "tenerife-campaign",
    name: "Conquest of Tenerife",
    category: RESISTANCE,
    path: &[
        LngLat::new(-16.31, 28.48),
        LngLat::new(-16.47, 28.44),
        LngLat::new(-16.37, 28.35),
    ],
    closed: false,
}];

static STORE: ContentStore = ContentStore::new(
    POINTS,
    ROUTES,
    CATEGORIES,
    GeoBounds::new(-18.5, 27.5, -13.0, 29.5),
    CameraTarget::new(LngLat::new(-15.8, 28.3), 6.2),
);

pub static STORY: Story = Story {
    slug: "the-guanche-ghost",
    title: "Ghosts of the Fortunate Isles",
    kicker: "The Guanches of the Canary Islands",
    tagline: "Berbers who sailed west, forgot the sea, and met Europe's expansion a century before the Americas did.",
    intro: &[
        "The first Canarians came from the African mainland — their language, their mummification, their rock art all point back to Amazigh North Africa. Then, remarkably, they stopped sailing, and each island grew its own world in isolation.",
        "The Castilian conquest of the archipelago, finished in 1496, was a rehearsal for the Americas. What survived it survives in caves, mountains, place names, and one whistled language.",
    ],
    accent: "#4e9a8f",
    repeat_select: RepeatSelect::Keeps,
    store: &STORE,
};
