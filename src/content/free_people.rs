//! The Amazigh: indigenous North Africa across three thousand years.

use lions_core::{
    CameraTarget, Category, CategoryInfo, ContentStore, EntryId, GeoBounds, GeoPoint, GeoRoute,
    LngLat, RepeatSelect,
};

use super::Story;

const ANTIQUITY: Category = Category("antiquity");
const HEARTLAND: Category = Category("heartland");
const AWAKENING: Category = Category("awakening");

static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: ANTIQUITY, label: "Ancient kingdoms", color: "#d4a24e" },
    CategoryInfo { key: HEARTLAND, label: "Heartlands", color: "#4e9a8f" },
    CategoryInfo { key: AWAKENING, label: "Modern awakening", color: "#b3541e" },
];

static POINTS: &[GeoPoint] = &[
    GeoPoint {
        id: EntryId("dougga"),
        name: "Dougga",
        coords: LngLat::new(9.22, 36.42),
        category: ANTIQUITY,
        year: Some(-139),
        detail: "The Libyco-Punic mausoleum here carried a bilingual inscription, one of the keys to reading the ancient Libyan script behind Tifinagh.",
    },
    GeoPoint {
        id: EntryId("cirta"),
        name: "Cirta (Constantine)",
        coords: LngLat::new(6.61, 36.36),
        category: ANTIQUITY,
        year: Some(-203),
        detail: "Capital of Massinissa, who united Numidia and ruled for half a century between Carthage and Rome.",
    },
    GeoPoint {
        id: EntryId("volubilis"),
        name: "Volubilis",
        coords: LngLat::new(-5.55, 34.07),
        category: ANTIQUITY,
        year: Some(-25),
        detail: "Juba II, scholar-king of Mauretania, reigns from here; his court wrote in Greek, minted in Latin, and ruled in Amazigh country.",
    },
    GeoPoint {
        id: EntryId("kabylia"),
        name: "Tizi Ouzou, Kabylia",
        coords: LngLat::new(4.05, 36.71),
        category: AWAKENING,
        year: Some(1980),
        detail: "The banning of a lecture on ancient Kabyle poetry ignites the Berber Spring, the first mass movement for Amazigh rights.",
    },
    GeoPoint {
        id: EntryId("al-hoceima"),
        name: "Al Hoceima, Rif",
        coords: LngLat::new(-3.93, 35.24),
        category: AWAKENING,
        year: Some(1921),
        detail: "Abd el-Krim's Rif Republic defeats Spain at Annual and holds out five years against two colonial empires.",
    },
    GeoPoint {
        id: EntryId("siwa"),
        name: "Siwa",
        coords: LngLat::new(25.54, 29.20),
        category: HEARTLAND,
        year: None,
        detail: "The easternmost Amazigh-speaking oasis, where Alexander consulted the oracle of Amun; Siwi is still spoken in its gardens.",
    },
    GeoPoint {
        id: EntryId("kidal"),
        name: "Kidal, Adrar des Ifoghas",
        coords: LngLat::new(1.41, 18.44),
        category: HEARTLAND,
        year: None,
        detail: "Tuareg country in the deep Sahara, where Tifinagh never stopped being written and the tamasheq guitar bands were born.",
    },
    GeoPoint {
        id: EntryId("agadir-charter"),
        name: "Agadir",
        coords: LngLat::new(-9.60, 30.42),
        category: AWAKENING,
        year: Some(1991),
        detail: "Moroccan associations sign the Agadir Charter for the Amazigh language; twenty years later Tamazight enters the constitution.",
    },
];

static ROUTES: &[GeoRoute] = &[GeoRoute {
    id: "tamazgha-span",
    name: "Span of Tamazgha",
    category: HEARTLAND,
    path: &[
        LngLat::new(-9.60, 30.42),
        LngLat::new(-3.93, 35.24),
        LngLat::new(4.05, 36.71),
        LngLat::new(9.22, 36.42),
        LngLat::new(25.54, 29.20),
    ],
    closed: false,
}];

static STORE: ContentStore = ContentStore::new(
    POINTS,
    ROUTES,
    CATEGORIES,
    GeoBounds::new(-12.0, 15.0, 28.0, 38.0),
    CameraTarget::new(LngLat::new(6.0, 30.0), 3.6),
);

pub static STORY: Story = Story {
    slug: "the-free-people",
    title: "The Free People",
    kicker: "Imazighen, from Numidia to now",
    tagline: "They were here before Carthage. Thirty million people still speak the languages the Romans called Libyan.",
    intro: &[
        "Imazighen — 'the free people' — is what North Africa's indigenous inhabitants call themselves. Their world, Tamazgha, runs from the Canary current to the Siwa oasis, and their script, Tifinagh, has been written for more than two thousand years.",
        "This story spans the whole arc: the Numidian kings who bargained with Rome, the mountain and desert heartlands that kept the languages alive, and the modern movements that put Tamazight into constitutions.",
    ],
    accent: "#b3541e",
    repeat_select: RepeatSelect::Clears,
    store: &STORE,
};
