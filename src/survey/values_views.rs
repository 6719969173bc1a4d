//! Values & Views: Q4-Q9

use super::{ChartSpec, QuestionCard, ResponseItem, Section, StatSpec};
use crate::route::Route;
use crate::theme::StatVariant;

pub const CAUSES: [ResponseItem; 10] = [
    ResponseItem::with_full("Exposing factory farming cruelty", "Exposing and sparing animals from the cruelty of factory farming", 3507, 68.5),
    ResponseItem::with_full("Ending live animal export", "Ending all live animal export", 3026, 59.1),
    ResponseItem::with_full("Exposing slaughterhouse cruelty", "Exposing slaughterhouse cruelty", 2241, 43.8),
    ResponseItem::with_full("Animals in 'entertainment'", "Uncovering the suffering of animals used for 'entertainment'", 1602, 31.3),
    ResponseItem::with_full("Protecting Australian wildlife", "Protecting Australian wildlife, including ending kangaroo and duck shooting", 1334, 26.1),
    ResponseItem::with_full("Reducing food system suffering", "Reducing the number of animals suffering in our food system", 949, 18.5),
    ResponseItem::with_full("Exposing dairy industry cruelty", "Exposing cruelty in the dairy industry", 923, 18.0),
    ResponseItem::with_full("Strategic legal actions", "Defending animals in the courts through strategic legal actions", 910, 17.8),
    ResponseItem::with_full("Emergency disaster grants", "Providing emergency grants to help animals in times of disaster", 649, 12.7),
    ResponseItem::with_full("Fish farm cruelty", "Exposing and ending cruelty on industrial fish farms, such as salmon farms", 242, 4.7),
];

pub const INSPIRATIONS: [ResponseItem; 7] = [
    ResponseItem::with_full("Achieving results", "They are committed to achieving results for animals", 3375, 65.9),
    ResponseItem::with_full("Courage", "They show courage, and bear witness where others will not go", 3363, 65.7),
    ResponseItem::with_full("Inspire me", "They inspire me with their vision, and give me hope a kinder world is possible", 2136, 41.7),
    ResponseItem::with_full("Global impact", "They have global impact, helping animals both here in Australia, and worldwide", 1542, 30.1),
    ResponseItem::with_full("Step up", "They are always the first to step up when animals need help", 1335, 26.1),
    ResponseItem::with_full("Offer hope", "They offer hope by transforming the food system and healing the animal-human relationship", 1243, 24.3),
    ResponseItem::with_full("Innovative", "They use innovative approaches, addressing the root causes of animal suffering", 1218, 23.8),
];

pub static SECTION: Section = Section {
    route: Route::ValuesViews,
    title: "Your Values and Views",
    description: "Understanding what matters most to Animals Australia supporters",
    cards: &[
        QuestionCard {
            id: "Q4",
            title: "Select 3 causes you would consider making a donation towards",
            subtitle: Some("Respondents could select up to 3 options"),
            respondents: Some(5024),
            stats: &[
                StatSpec::new("68.5%", "Factory farming", StatVariant::Primary),
                StatSpec::new("59.1%", "Live export", StatVariant::Secondary),
                StatSpec::new("43.8%", "Slaughterhouse cruelty", StatVariant::Accent),
            ],
            chart: Some(ChartSpec {
                heading: None,
                items: &CAUSES,
                max_value: 3800,
                unit: "selections",
            }),
            breakdowns: &[],
            insight_heading: "Key insights:",
            insights: &[
                "Factory farming (68.5%), live export (59.1%), and slaughterhouse cruelty (43.8%) are the clear top 3 priorities - these high-profile cruelty issues with strong public awareness dominate supporter interest.",
                "Fish farm cruelty ranked last at just 4.7%, suggesting a potential awareness gap or lower perceived urgency around aquaculture welfare.",
                "The mid-tier causes (food system, dairy, legal actions) cluster tightly around 18%, indicating similar levels of interest.",
            ],
        },
        QuestionCard {
            id: "Q5",
            title: "What inspires you to support Animals Australia?",
            subtitle: Some("Respondents could select up to 3 options"),
            respondents: Some(5021),
            stats: &[
                StatSpec::new("65.9%", "Achieving results", StatVariant::Primary),
                StatSpec::new("65.7%", "Courage", StatVariant::Secondary),
                StatSpec::new("41.7%", "Inspire me", StatVariant::Accent),
            ],
            chart: Some(ChartSpec {
                heading: None,
                items: &INSPIRATIONS,
                max_value: 3600,
                unit: "selections",
            }),
            breakdowns: &[],
            insight_heading: "Key insights:",
            insights: &[
                "Achieving results (65.9%) and Courage (65.7%) are virtually tied as the top inspirations - supporters value both tangible outcomes AND the willingness to confront difficult realities.",
                "Inspire me (41.7%) ranks third, showing the emotional appeal of vision and hope for a kinder world resonates strongly with supporters.",
                "The bottom four options (Global impact, Step up, Offer hope, Innovative) cluster between 23-30%, suggesting these are secondary motivators rather than primary drivers.",
            ],
        },
    ],
    pending: Some("Results for Q6-Q9 have not been published yet."),
};
