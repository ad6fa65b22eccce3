//! The Barbary lion: how North Africa's lion disappeared.

use lions_core::{
    CameraTarget, Category, CategoryInfo, ContentStore, EntryId, GeoBounds, GeoPoint, GeoRoute,
    LngLat, RepeatSelect,
};

use super::Story;

const SIGHTING: Category = Category("sighting");
const ROYAL: Category = Category("royal");
const REFUGE: Category = Category("refuge");

static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { key: SIGHTING, label: "Last sightings", color: "#b3541e" },
    CategoryInfo { key: ROYAL, label: "Royal menageries", color: "#d4a24e" },
    CategoryInfo { key: REFUGE, label: "Mountain refuges", color: "#4e9a8f" },
];

static POINTS: &[GeoPoint] = &[
    GeoPoint {
        id: EntryId("meknes"),
        name: "Meknès",
        coords: LngLat::new(-5.55, 33.88),
        category: ROYAL,
        year: Some(1672),
        detail: "Sultan Moulay Ismail keeps lions at his imperial city; tribute lions flow to the court for two more centuries.",
    },
    GeoPoint {
        id: EntryId("oran-hinterland"),
        name: "Oran hinterland",
        coords: LngLat::new(-0.64, 35.70),
        category: SIGHTING,
        year: Some(1891),
        detail: "French colonial bounty records fall silent in western Algeria; the last payout near Oran dates to 1891.",
    },
    GeoPoint {
        id: EntryId("khenchela"),
        name: "Khenchela, Aurès",
        coords: LngLat::new(7.14, 35.43),
        category: SIGHTING,
        year: Some(1943),
        detail: "Wartime travellers report a lion in the Aurès cedar forest; it is among the last credible Algerian accounts.",
    },
    GeoPoint {
        id: EntryId("tizi-n-tichka"),
        name: "Tizi n'Tichka pass",
        coords: LngLat::new(-7.37, 31.29),
        category: SIGHTING,
        year: Some(1942),
        detail: "The last confirmed wild Barbary lion is shot on the flank of the High Atlas pass road.",
    },
    GeoPoint {
        id: EntryId("middle-atlas"),
        name: "Middle Atlas cedars",
        coords: LngLat::new(-5.10, 33.40),
        category: REFUGE,
        year: Some(1930),
        detail: "Cedar forest above 1,800 meters shelters the final breeding population through the 1920s.",
    },
    GeoPoint {
        id: EntryId("chelia"),
        name: "Djebel Chélia",
        coords: LngLat::new(6.65, 35.32),
        category: REFUGE,
        year: None,
        detail: "Algeria's highest Atlas summit anchors the eastern refuge; sighting claims continue into the 1950s.",
    },
    GeoPoint {
        id: EntryId("rabat-zoo"),
        name: "Rabat zoo",
        coords: LngLat::new(-6.86, 33.95),
        category: ROYAL,
        year: Some(1973),
        detail: "The Moroccan royal collection, descended from tribute lions, seeds today's studbook of 'royal' Barbary lions.",
    },
    GeoPoint {
        id: EntryId("casablanca-photo"),
        name: "Casablanca–Ouarzazate air route",
        coords: LngLat::new(-7.59, 33.57),
        category: SIGHTING,
        year: Some(1925),
        detail: "Marcelin Flandrin photographs a wild lion from the mail plane; it becomes the species' most famous image.",
    },
];

static ROUTES: &[GeoRoute] = &[GeoRoute {
    id: "historic-range",
    name: "Historic Atlas range",
    category: REFUGE,
    path: &[
        LngLat::new(-8.6, 31.0),
        LngLat::new(-5.5, 33.9),
        LngLat::new(-1.5, 34.8),
        LngLat::new(4.0, 36.2),
        LngLat::new(8.5, 35.5),
        LngLat::new(7.0, 34.2),
        LngLat::new(-2.0, 32.8),
        LngLat::new(-7.5, 30.5),
    ],
    closed: true,
}];

static STORE: ContentStore = ContentStore::new(
    POINTS,
    ROUTES,
    CATEGORIES,
    GeoBounds::new(-10.0, 29.0, 10.0, 37.5),
    CameraTarget::new(LngLat::new(-0.5, 33.5), 4.8),
);

pub static STORY: Story = Story {
    slug: "the-last-lions",
    title: "The Last Lions of the Atlas",
    kicker: "Panthera leo leo, extinct in the wild c. 1960",
    tagline: "The Barbary lion survived Rome's arenas and a dozen dynasties. It did not survive the rifle and the road.",
    intro: &[
        "The lion that fought in the Colosseum came, mostly, from here: the cold cedar forests and high passes of the Maghreb. It was larger-maned and colder-adapted than its savanna cousins, and for centuries it lived closer to people than any other lion on earth.",
        "By 1900 it was a rumor. The points below trace how the rumor faded — sighting by sighting, refuge by refuge — and where its blood may still run in captive descent.",
    ],
    accent: "#b3541e",
    repeat_select: RepeatSelect::Keeps,
    store: &STORE,
};
