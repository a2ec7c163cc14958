//! "Guardians of the Mangrove" - suppressed mangrove and a forged deed
//!
//! An agent inspects a mansion whose pier stands on protected mangrove. The
//! owner claims a family inheritance older than the reserve; the papers look
//! right until the dates start disagreeing with each other.

use crate::domain::scenario::{
    DecisionClass, EdgeDef, EndingKind, NodeDef, ScenarioDefinition,
};

pub fn definition() -> ScenarioDefinition {
    ScenarioDefinition {
        id: "mangrove",
        title: "Guardians of the Mangrove",
        summary: "Mangrove suppression and forged inheritance papers",
        narrator_brief: "Realistic environmental-crime narrator. An agent inspects a pier \
                         built over protected mangrove; the elderly owner claims inheritance \
                         predating the reserve, but the documents carry inconsistent dates. \
                         Moral dilemma, social pressure against legal duty, educational tone.",
        entry: "golden_shore",
        nodes: vec![
            NodeDef {
                id: "golden_shore",
                title: "Chapter 1: The Golden Coast",
                prompt: "A mansion on the preservation line, a new pier striding over the \
                         mangrove on concrete legs. The complaint says the roots underneath \
                         are dying.",
                fallback: "The pier gleams, too white, too new, marching over the mangrove on \
                           concrete pilings. Under it the roots have gone grey. A gardener \
                           watches you from the lawn and pretends not to. The preservation \
                           marker stands thirty meters behind the house.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Examine,
                        keywords: &["pier", "inspect", "examine", "survey", "shoreline"],
                        to: "the_owner",
                        grants: &["pier_over_mangrove"],
                    },
                    EdgeDef {
                        class: DecisionClass::Question,
                        keywords: &["ask", "neighbors", "talk", "gardener"],
                        to: "the_owner",
                        grants: &["preservation_boundary"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "the_owner",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "the_owner",
                title: "Chapter 2: The Proprietor",
                prompt: "The owner is old money and old manners. He serves coffee, talks about \
                         his grandfather's thatch house, and insists the pier is only a \
                         renovation of what was always there.",
                fallback: "He receives you with coffee and courtesy that costs him nothing. \
                           'My grandfather built on this shore before your reserve existed,' \
                           he says, tapping a leather folder. 'This is renovation, not \
                           construction.' The folder is very thick for a renovation.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Question,
                        keywords: &["ask", "question", "interview", "inheritance", "family"],
                        to: "deed_review",
                        grants: &["inheritance_claim"],
                    },
                    EdgeDef {
                        class: DecisionClass::Document,
                        keywords: &["papers", "documents", "deed", "records", "request"],
                        to: "deed_review",
                        grants: &["original_thatch_house"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "deed_review",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "deed_review",
                title: "Chapter 3: The Paper Trail",
                prompt: "The deed looks legitimate: seals, signatures, stamps. But the reserve \
                         was gazetted in one year and the 'inherited' pier annex is dated two \
                         years after it.",
                fallback: "Seals, stamps, a notary's flourish: the deed wears all the right \
                           clothes. Then the dates. The reserve was gazetted first; the annex \
                           deeding the shorefront is signed two years later, in ink that \
                           looks younger than either.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Examine,
                        keywords: &["compare", "dates", "examine", "inspect", "check"],
                        to: "hidden_truth",
                        grants: &["inconsistent_dates"],
                    },
                    EdgeDef {
                        class: DecisionClass::Document,
                        keywords: &["registry", "notary", "archive", "certified", "verify"],
                        to: "hidden_truth",
                        grants: &["suspect_deed"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "hidden_truth",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "hidden_truth",
                title: "Chapter 4: The Hidden Truth",
                prompt: "Registry archives and satellite imagery agree: the mangrove was cut \
                         eighteen months ago and the deed annex is a forgery.",
                fallback: "The registry's own ledger has no record of the annex, and the \
                           satellite archive is crueler still: eighteen months ago this \
                           stretch was unbroken green. The forgery is careful, expensive, \
                           and underneath it the mangrove is simply gone.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Document,
                        keywords: &["photograph", "satellite", "imagery", "evidence", "document"],
                        to: "final_ruling",
                        grants: &["forged_deed"],
                    },
                    EdgeDef {
                        class: DecisionClass::Confront,
                        keywords: &["confront", "accuse", "present", "show him"],
                        to: "final_ruling",
                        grants: &["recent_clearing"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "final_ruling",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "final_ruling",
                title: "Chapter 5: The Ruling",
                prompt: "The fine is drafted, the demolition order ready. The owner's lawyers \
                         are already calling; so are the neighbors. Signing means a storm.",
                fallback: "The infraction notice waits for one signature: yours. The lawyers \
                           have called twice, a councilman once. Across the bay the mangrove \
                           line ends exactly where the money starts. Pen or pocket.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Report,
                        keywords: &["fine", "sign", "embargo", "order", "report", "uphold"],
                        to: "fine_upheld",
                        grants: &["restoration_order"],
                    },
                    EdgeDef {
                        class: DecisionClass::Withdraw,
                        keywords: &["withdraw", "back down", "drop", "let it go"],
                        to: "backed_down",
                        grants: &[],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "standoff",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "fine_upheld",
                title: "Ending: The Tide Returns",
                prompt: "Fine signed, pier embargoed, restoration ordered under the forest \
                         code.",
                fallback: "You sign. The embargo goes up on the pier the same week, and the \
                           restoration plan follows. Mangrove grows back slowly, but it \
                           grows; seedlings take the mud where the pilings come out.",
                edges: vec![],
                ending: Some(EndingKind::Positive),
            },
            NodeDef {
                id: "standoff",
                title: "Ending: High Water Mark",
                prompt: "The case enters appeal limbo; the pier stays, but so does the file.",
                fallback: "Injunction answers embargo, appeal answers injunction. The pier \
                           stands, the file stays open, and every high tide the sea files \
                           its own quiet objection against the pilings.",
                edges: vec![],
                ending: Some(EndingKind::Neutral),
            },
            NodeDef {
                id: "backed_down",
                title: "Ending: The Polite Silence",
                prompt: "The notice is never signed; the shoreline keeps being sold one pier \
                         at a time.",
                fallback: "The notice goes back in the drawer, unsigned. At the next dinner \
                           party someone calls you reasonable. By year's end there are three \
                           new piers on the golden coast, each with excellent paperwork.",
                edges: vec![],
                ending: Some(EndingKind::Negative),
            },
        ],
    }
}
