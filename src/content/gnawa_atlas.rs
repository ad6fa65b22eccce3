//! Gnawa music: a sub-Saharan diaspora's sound map of the Maghreb.

use lions_core::{
    CameraTarget, Category, CategoryInfo, ContentStore, EntryId, GeoBounds, GeoPoint, GeoRoute,
    LngLat, RepeatSelect,
};

use super::Story;

const ZAWIYA: Category = Category("zawiya");
const FESTIVAL: Category = Category("festival");
const COUSIN: Category = Category("cousin");

static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: ZAWIYA, label: "Brotherhood houses", color: "#4e9a8f" },
    CategoryInfo { key: FESTIVAL, label: "Festivals", color: "#d4a24e" },
    CategoryInfo { key: COUSIN, label: "Cousin traditions", color: "#b3541e" },
];

static POINTS: &[GeoPoint] = &[
    GeoPoint {
        id: EntryId("essaouira"),
        name: "Essaouira",
        coords: LngLat::new(-9.77, 31.51),
        category: FESTIVAL,
        year: Some(1998),
        detail: "The Gnawa and World Music Festival turns a port town of 70,000 into a stage for half a million; maâlems share bills with jazz players.",
    },
    GeoPoint {
        id: EntryId("marrakech"),
        name: "Marrakech",
        coords: LngLat::new(-7.99, 31.63),
        category: ZAWIYA,
        year: None,
        detail: "Jemaa el-Fnaa's nightly circles are the tradition's public face; the city's zawiyas keep its private, all-night lila ceremonies.",
    },
    GeoPoint {
        id: EntryId("fes"),
        name: "Fes",
        coords: LngLat::new(-4.98, 34.03),
        category: ZAWIYA,
        year: None,
        detail: "The old capital's Gnawa houses sit alongside the Sufi orders; here the repertoire absorbed its Arabic-Andalusi layers.",
    },
    GeoPoint {
        id: EntryId("tangier"),
        name: "Tangier",
        coords: LngLat::new(-5.80, 35.78),
        category: ZAWIYA,
        year: Some(1968),
        detail: "Randy Weston settles in and carries maâlem Abdellah El Gourd's music into American jazz; the exchange runs for decades.",
    },
    GeoPoint {
        id: EntryId("casablanca"),
        name: "Casablanca",
        coords: LngLat::new(-7.59, 33.57),
        category: FESTIVAL,
        year: Some(1970),
        detail: "Nass El Ghiwane fold Gnawa rhythm into protest song and become the voice of a generation across the Maghreb.",
    },
    GeoPoint {
        id: EntryId("khamlia"),
        name: "Khamlia",
        coords: LngLat::new(-4.02, 31.08),
        category: ZAWIYA,
        year: None,
        detail: "A Saharan village of Gnawa families at the foot of Erg Chebbi, keeping the desert-edge style alive for visitors and for itself.",
    },
    GeoPoint {
        id: EntryId("algiers"),
        name: "Algiers",
        coords: LngLat::new(3.06, 36.75),
        category: COUSIN,
        year: None,
        detail: "Algeria's diwan tradition shares the Gnawa's ancestry, instruments, and trance repertoire under a different name.",
    },
    GeoPoint {
        id: EntryId("tunis"),
        name: "Tunis",
        coords: LngLat::new(10.17, 36.80),
        category: COUSIN,
        year: None,
        detail: "Stambeli, the Tunisian branch of the same diaspora, survives in a handful of houses around the old city.",
    },
];

static ROUTES: &[GeoRoute] = &[GeoRoute {
    id: "diaspora-arc",
    name: "Diaspora arc",
    category: COUSIN,
    path: &[
        LngLat::new(-9.77, 31.51),
        LngLat::new(-7.99, 31.63),
        LngLat::new(-4.98, 34.03),
        LngLat::new(3.06, 36.75),
        LngLat::new(10.17, 36.80),
    ],
    closed: false,
}];

static STORE: ContentStore = ContentStore::new(
    POINTS,
    ROUTES,
    CATEGORIES,
    GeoBounds::new(-12.0, 29.5, 12.0, 38.0),
    CameraTarget::new(LngLat::new(-1.0, 33.8), 4.6),
);

pub static STORY: Story = Story {
    slug: "gnawa-atlas",
    title: "An Atlas of the Gnawa",
    kicker: "Music of a displaced people",
    tagline: "Descendants of the trans-Saharan slave trade built a healing music out of iron castanets and a three-stringed bass. It now fills stadiums.",
    intro: &[
        "Gnawa music is the sound the trans-Saharan trade left behind: sub-Saharan ritual carried north in chains, fused over centuries with Sufi practice and Maghrebi melody into an all-night healing ceremony called the lila.",
        "Its geography runs from Atlantic port towns to Saharan villages, with cousin traditions — diwan in Algeria, stambeli in Tunisia — marking the same diaspora further east.",
    ],
    accent: "#4e9a8f",
    repeat_select: RepeatSelect::Clears,
    store: &STORE,
};
