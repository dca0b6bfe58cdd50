//! Legend text the site shows next to each panel. Reported verbatim.

pub const CAPITAL_METRIC: &str = "Average monthly temperatures are presented in Farenheit (°F).";

pub const FINANCIALS_METRIC: &str = "All monetary values presented in United States Dollar (USD$).";

pub const GEOGRAPHY_METRIC: &str = "All distances presented in kilometers (km).";

pub const MANPOWER_DESCRIPTION: &str = "The following values detail the maximum, theoretical persons the nation can commit to a war effort. The percentages represent the percentage of the total population";

pub const AIRPOWER_DESCRIPTION: &str = "These following values tracks specific categories related to aerial warfare capabilities of a given power. Rates are based on the U.S. Air Force's 75 percent average across all categories to account for availability of individual over-battlefield assets due against the backdrop of general maintenance, modernization, refurbishment and the like. Percent values are a percentage of total inventory stock available.";

pub const LAND_FORCES_DESCRIPTION: &str = "These following values track specific categories related to land warfare capabilities of a given power.  rates are based against the U.S. Army's 80 percent average across all categories to account for availability of individual battlefield assets due to general maintenance, modernization, refurbishment and the like.";

pub const END_USE_PRODUCTS_DESCRIPTION: &str = "End-use products reflect a given nation's ability to produce goods and services through manufacturing, industry, and / or agriculture. The entries reflect industries that would become stressed, disrupted, or spoils-of-war in the event of Total War.";

pub const NATURAL_RESOURCES_METRICS: &str = "Oil bbl represented as unit 'barrel of oil'. Natural Gas represented in 'cubic meters'. Coal represented in 'metric tons'.";
