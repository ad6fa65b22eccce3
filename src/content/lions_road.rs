//! The trans-Saharan trade: gold, salt, and books across the desert.

use lions_core::{
    CameraTarget, Category, CategoryInfo, ContentStore, EntryId, GeoBounds, GeoPoint, GeoRoute,
    LngLat, RepeatSelect,
};

use super::Story;

const ENTREPOT: Category = Category("entrepot");
const OASIS: Category = Category("oasis");
const TERMINUS: Category = Category("terminus");

static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: ENTREPOT, label: "Desert ports", color: "#d4a24e" },
    CategoryInfo { key: OASIS, label: "Oases & wells", color: "#4e9a8f" },
    CategoryInfo { key: TERMINUS, label: "Sahel termini", color: "#b3541e" },
];

static POINTS: &[GeoPoint] = &[
    GeoPoint {
        id: EntryId("sijilmasa"),
        name: "Sijilmasa",
        coords: LngLat::new(-4.28, 31.28),
        category: ENTREPOT,
        year: Some(757),
        detail: "The Tafilalt's caravan capital mints the gold of Ghana into dinars; in its prime a caravan could number ten thousand camels.",
    },
    GeoPoint {
        id: EntryId("taghaza"),
        name: "Taghaza",
        coords: LngLat::new(-5.00, 23.60),
        category: OASIS,
        year: Some(1352),
        detail: "Ibn Battuta finds a town built entirely of salt slabs; here salt is cut and carried south to trade, weight for weight, against gold.",
    },
    GeoPoint {
        id: EntryId("walata"),
        name: "Walata",
        coords: LngLat::new(-7.02, 17.30),
        category: TERMINUS,
        year: Some(1224),
        detail: "After Ghana's decline the western road bends here; its painted houses still keep the scholar families' libraries.",
    },
    GeoPoint {
        id: EntryId("timbuktu"),
        name: "Timbuktu",
        coords: LngLat::new(-3.01, 16.77),
        category: TERMINUS,
        year: Some(1325),
        detail: "Mansa Musa returns from Mecca and raises Djinguereber; the book trade comes to outearn the gold trade.",
    },
    GeoPoint {
        id: EntryId("gao"),
        name: "Gao",
        coords: LngLat::new(-0.05, 16.27),
        category: TERMINUS,
        year: Some(1464),
        detail: "Capital of Songhai under Sunni Ali, the largest empire the Sahel ever produced, fed by the eastern caravan roads.",
    },
    GeoPoint {
        id: EntryId("agadez"),
        name: "Agadez",
        coords: LngLat::new(7.99, 16.97),
        category: ENTREPOT,
        year: Some(1449),
        detail: "The Aïr sultanate's mud-brick minaret marks the crossroads where Tuareg caravans turn toward Hausaland or the Fezzan.",
    },
    GeoPoint {
        id: EntryId("ghadames"),
        name: "Ghadames",
        coords: LngLat::new(9.50, 30.13),
        category: OASIS,
        year: None,
        detail: "The 'pearl of the desert', a covered town engineered against the sun, where the Tripoli road meets the sand sea.",
    },
    GeoPoint {
        id: EntryId("kairouan"),
        name: "Kairouan",
        coords: LngLat::new(10.10, 35.68),
        category: ENTREPOT,
        year: Some(670),
        detail: "Uqba ibn Nafi's garrison city becomes the Maghreb's first great Islamic metropolis and the northern gate of the eastern roads.",
    },
    GeoPoint {
        id: EntryId("tripoli"),
        name: "Tripoli",
        coords: LngLat::new(13.19, 32.89),
        category: ENTREPOT,
        year: None,
        detail: "The Mediterranean terminus of the Fezzan road; the last trans-Saharan caravans unload here in the early twentieth century.",
    },
];

static ROUTES: &[GeoRoute] = &[
    GeoRoute {
        id: "western-road",
        name: "Western gold road",
        category: ENTREPOT,
        path: &[
            LngLat::new(-4.28, 31.28),
            LngLat::new(-5.00, 23.60),
            LngLat::new(-7.02, 17.30),
            LngLat::new(-3.01, 16.77),
        ],
        closed: false,
    },
    GeoRoute {
        id: "fezzan-road",
        name: "Fezzan road",
        category: OASIS,
        path: &[
            LngLat::new(13.19, 32.89),
            LngLat::new(9.50, 30.13),
            LngLat::new(7.99, 16.97),
            LngLat::new(-0.05, 16.27),
        ],
        closed: false,
    },
];

static STORE: ContentStore = ContentStore::new(
    POINTS,
    ROUTES,
    CATEGORIES,
    GeoBounds::new(-12.0, 14.0, 16.0, 37.0),
    CameraTarget::new(LngLat::new(1.5, 25.0), 3.8),
);

pub static STORY: Story = Story {
    slug: "the-lions-road",
    title: "The Lion's Road",
    kicker: "Trans-Saharan trade, 8th–19th centuries",
    tagline: "For a thousand years the world's gold crossed the world's largest desert on foot.",
    intro: &[
        "The Sahara was never a wall. It was a sea, and these were its ports: a chain of oases and caravan towns where salt went south, gold went north, and scholars, slaves, and stories moved in both directions.",
        "The two great roads below carried most of it — the western road through the salt mines of Taghaza, and the Fezzan road linking Tripoli to the Niger bend.",
    ],
    accent: "#d4a24e",
    repeat_select: RepeatSelect::Clears,
    store: &STORE,
};
