//! "Nets of Survival" - industrial trawling in artisanal waters
//!
//! A trawler works an exclusion zone reserved for artisanal fishing. The
//! inspection finds illegal mesh and endangered bycatch; the village tells
//! the rest of the story.

use crate::domain::scenario::{
    DecisionClass, EdgeDef, EndingKind, NodeDef, ScenarioDefinition,
};

pub fn definition() -> ScenarioDefinition {
    ScenarioDefinition {
        id: "sea",
        title: "Nets of Survival",
        summary: "Illegal industrial fishing against a subsistence community",
        narrator_brief: "Documentary-toned environmental-crime narrator. An agent answers a \
                         complaint about an industrial trawler inside an artisanal exclusion \
                         zone: questionable license, illegal mesh, endangered bycatch, \
                         tampered GPS, and a fishing village watching its catch collapse. \
                         Tense, focused on human and ecological impact.",
        entry: "distress_call",
        nodes: vec![
            NodeDef {
                id: "distress_call",
                title: "Chapter 1: The Ocean's Cry",
                prompt: "Dawn at the fishing village. Canoes beached, nets dry. Offshore, \
                         inside the exclusion zone, a trawler drags steel cables through \
                         protected water.",
                fallback: "The canoes are beached like punctuation at the end of an argument \
                           already lost. Offshore, well inside the exclusion buoys, a trawler \
                           drags its cables with industrial patience. On the sand, forty \
                           fishermen are waiting to see what you do about it.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Question,
                        keywords: &["fishermen", "ask", "listen", "community", "talk"],
                        to: "steel_captain",
                        grants: &["exclusion_zone"],
                    },
                    EdgeDef {
                        class: DecisionClass::Examine,
                        keywords: &["binoculars", "observe", "watch", "examine", "trawler"],
                        to: "steel_captain",
                        grants: &["trawler_sighting"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "steel_captain",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "steel_captain",
                title: "Chapter 2: Captain of Steel",
                prompt: "Alongside the trawler. The captain waves a license folder and talks \
                         about efficiency and feeding cities, contempt barely disguised.",
                fallback: "The captain meets you at the rail with a folder and a speech about \
                           efficiency, about feeding cities while 'hobby fishermen' complain. \
                           The license he flashes is for another vessel class and he knows \
                           that you know. Below deck, winches keep turning.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Question,
                        keywords: &["license", "papers", "permit", "ask", "demand"],
                        to: "cargo_hold",
                        grants: &["dubious_license"],
                    },
                    EdgeDef {
                        class: DecisionClass::Confront,
                        keywords: &["board", "confront", "order", "stop the winches"],
                        to: "cargo_hold",
                        grants: &["captains_contempt"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "cargo_hold",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "cargo_hold",
                title: "Chapter 3: Holds of Greed",
                prompt: "Inside the hold: mesh far below legal gauge, juvenile catch by the \
                         ton, two protected species on ice, and a chart plotter whose track \
                         history stops exactly at the zone boundary.",
                fallback: "The hold opens on tons of fish that never got to grow up. The mesh \
                           gauge disappears twice into every opening of the net. On ice, \
                           under a tarp nobody will claim, two groupers from the protected \
                           list. The chart plotter's history ends, neatly, at the boundary \
                           line.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Examine,
                        keywords: &["nets", "mesh", "measure", "inspect", "examine", "hold"],
                        to: "village_voices",
                        grants: &["illegal_mesh"],
                    },
                    EdgeDef {
                        class: DecisionClass::Document,
                        keywords: &["photograph", "log", "gps", "document", "record"],
                        to: "village_voices",
                        grants: &["tampered_gps"],
                    },
                    EdgeDef {
                        class: DecisionClass::Question,
                        keywords: &["crew", "speak", "interview", "deckhand"],
                        to: "village_voices",
                        grants: &["endangered_bycatch"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "village_voices",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "village_voices",
                title: "Chapter 4: Voices of Tradition",
                prompt: "Back ashore, the village talks: catches collapsed since the trawler \
                         came, threats against whoever filed the complaint, families one bad \
                         season from leaving.",
                fallback: "In the association shed the voices come slowly, then all at once. \
                           Catches down by half since the trawler came. A skiff's hull stove \
                           in the night after the complaint was filed. An old woman holds up \
                           a fish the length of her hand: 'This used to be the small one.'",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Question,
                        keywords: &["listen", "interview", "ask", "testimony", "village"],
                        to: "scales_of_justice",
                        grants: &["intimidation_reports"],
                    },
                    EdgeDef {
                        class: DecisionClass::Document,
                        keywords: &["record", "document", "statements", "collect", "sign"],
                        to: "scales_of_justice",
                        grants: &["collapsed_catches"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "scales_of_justice",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "scales_of_justice",
                title: "Chapter 5: The Scales of Justice",
                prompt: "Everything is in hand: mesh gauge, bycatch, GPS gap, testimony. \
                         Seizing the vessel is expensive, loud, and correct; the company's \
                         lawyers are already on the phone.",
                fallback: "The seizure order is one signature away. The company's lawyer is \
                           on your second phone line explaining what a vessel like that \
                           costs per idle day. On the beach below, the canoes are going out \
                           to work water the trawler has not yet reached.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Report,
                        keywords: &["seize", "impound", "fine", "report", "apprehend"],
                        to: "boat_seized",
                        grants: &["seizure_order"],
                    },
                    EdgeDef {
                        class: DecisionClass::Withdraw,
                        keywords: &["release", "let them go", "warn", "back off"],
                        to: "fleet_prevails",
                        grants: &[],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "uneasy_truce",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "boat_seized",
                title: "Ending: The Net Comes Up Empty",
                prompt: "Vessel seized, record fine, the exclusion zone holds.",
                fallback: "You sign. The trawler comes in under escort, hold sealed, and the \
                           fine makes the regional news. Two seasons later the fishermen \
                           report the small fish returning first, the way they always do.",
                edges: vec![],
                ending: Some(EndingKind::Positive),
            },
            NodeDef {
                id: "uneasy_truce",
                title: "Ending: Slack Water",
                prompt: "A fine without seizure; the trawler moves on to other water.",
                fallback: "The fine is issued, the vessel released. It steams north to some \
                           other community's horizon. The zone is quiet again, for now, the \
                           way water is quiet between two tides.",
                edges: vec![],
                ending: Some(EndingKind::Neutral),
            },
            NodeDef {
                id: "fleet_prevails",
                title: "Ending: Deep Trawl",
                prompt: "A warning only; within a month three trawlers work the zone.",
                fallback: "A warning is a price list. Within a month there are three trawlers \
                           on the zone, working it in shifts, and the canoes stop going out. \
                           The village starts selling outboard motors.",
                edges: vec![],
                ending: Some(EndingKind::Negative),
            },
        ],
    }
}
