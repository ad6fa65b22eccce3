//! Al-Andalus: eight centuries of Islamic Iberia.

use lions_core::{
    CameraTarget, Category, CategoryInfo, ContentStore, EntryId, GeoBounds, GeoPoint, GeoRoute,
    LngLat, RepeatSelect,
};

use super::Story;

const CONQUEST: Category = Category("conquest");
const CALIPHATE: Category = Category("caliphate");
const TAIFA: Category = Category("taifa");
const RECONQUISTA: Category = Category("reconquista");

static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: CONQUEST, label: "Conquest", color: "#b3541e" },
    CategoryInfo { key: CALIPHATE, label: "Caliphate", color: "#d4a24e" },
    CategoryInfo { key: TAIFA, label: "Taifa kingdoms", color: "#4e9a8f" },
    CategoryInfo { key: RECONQUISTA, label: "Reconquista", color: "#5a7d9a" },
];

static POINTS: &[GeoPoint] = &[
    GeoPoint {
        id: EntryId("gibraltar"),
        name: "Gibraltar",
        coords: LngLat::new(-5.35, 36.14),
        category: CONQUEST,
        year: Some(711),
        detail: "Tariq ibn Ziyad lands with some 7,000 troops; the rock still carries his name, Jabal Tariq.",
    },
    GeoPoint {
        id: EntryId("guadalete"),
        name: "Río Guadalete",
        coords: LngLat::new(-5.75, 36.65),
        category: CONQUEST,
        year: Some(711),
        detail: "The Visigothic king Roderic falls in a single battle and the peninsula opens in a decade.",
    },
    GeoPoint {
        id: EntryId("cordoba"),
        name: "Córdoba",
        coords: LngLat::new(-4.78, 37.88),
        category: CALIPHATE,
        year: Some(756),
        detail: "Abd al-Rahman I, last of the Umayyads, makes the city his capital; by the tenth century it is the largest in western Europe.",
    },
    GeoPoint {
        id: EntryId("madinat-al-zahra"),
        name: "Madinat al-Zahra",
        coords: LngLat::new(-4.87, 37.89),
        category: CALIPHATE,
        year: Some(936),
        detail: "Abd al-Rahman III builds a palace city of ten thousand workers west of Córdoba; it burns within a century.",
    },
    GeoPoint {
        id: EntryId("zaragoza"),
        name: "Zaragoza",
        coords: LngLat::new(-0.88, 41.65),
        category: TAIFA,
        year: Some(1018),
        detail: "The northernmost taifa, a court of mathematicians and poets holding the Ebro frontier.",
    },
    GeoPoint {
        id: EntryId("sevilla"),
        name: "Sevilla",
        coords: LngLat::new(-5.99, 37.39),
        category: TAIFA,
        year: Some(1091),
        detail: "Al-Mutamid's poet-kingdom falls to the Almoravids; the Almohads later raise the Giralda over it.",
    },
    GeoPoint {
        id: EntryId("toledo"),
        name: "Toledo",
        coords: LngLat::new(-4.02, 39.86),
        category: RECONQUISTA,
        year: Some(1085),
        detail: "Alfonso VI takes the old Visigothic capital; its translation school carries Arabic learning into Latin Europe.",
    },
    GeoPoint {
        id: EntryId("las-navas"),
        name: "Las Navas de Tolosa",
        coords: LngLat::new(-3.58, 38.28),
        category: RECONQUISTA,
        year: Some(1212),
        detail: "The Almohad army breaks in the Sierra Morena passes; al-Andalus never again fields a unified force.",
    },
    GeoPoint {
        id: EntryId("granada"),
        name: "Granada",
        coords: LngLat::new(-3.59, 37.18),
        category: RECONQUISTA,
        year: Some(1492),
        detail: "The Nasrid emirate endures 254 years behind the Sierra Nevada before Boabdil hands over the Alhambra's keys.",
    },
];

static ROUTES: &[GeoRoute] = &[GeoRoute {
    id: "conquest-road",
    name: "Road of 711",
    category: CONQUEST,
    path: &[
        LngLat::new(-5.35, 36.14),
        LngLat::new(-5.75, 36.65),
        LngLat::new(-4.78, 37.88),
        LngLat::new(-4.02, 39.86),
    ],
    closed: false,
}];

static STORE: ContentStore = ContentStore::new(
    POINTS,
    ROUTES,
    CATEGORIES,
    GeoBounds::new(-9.5, 35.0, 1.0, 43.5),
    CameraTarget::new(LngLat::new(-4.5, 38.8), 5.5),
);

pub static STORY: Story = Story {
    slug: "islamic-spain",
    title: "The Ornament of the World",
    kicker: "Al-Andalus, 711–1492",
    tagline: "Eight centuries of Islamic Iberia, from a landing at Gibraltar to the keys of the Alhambra.",
    intro: &[
        "In the spring of 711 a Berber commander crossed eight miles of water and undid a kingdom. What followed was not a single story but four: conquest, caliphate, fragmentation, and the long Christian advance.",
        "Follow the places below in any order. Each point on the map is a hinge where the peninsula's history turned.",
    ],
    accent: "#d4a24e",
    repeat_select: RepeatSelect::Clears,
    store: &STORE,
};
