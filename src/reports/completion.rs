//! Completion Performance Review (CPR) schema
//!
//! Most per-activity blocks (final casing, sand control, perforation, ...)
//! repeat one timing quartet; the alias for waiting-on-weather drifts
//! between `WoWDays` and `WoW` depending on the block, and the older
//! workover blocks spell total days `TimeIncludingNPTWoW`. All of it is
//! recorded as alias data below.

use super::{opt, req};
use crate::schema::{FieldKind as Kind, FieldSpec, Schema};
use once_cell::sync::Lazy;

/// The CPR record schema
pub static COMPLETION: Lazy<Schema> = Lazy::new(|| {
    let mut fields = vec![
        req("Year", Kind::Integer),
        req("WellId", Kind::Integer),
        req("Quarter", Kind::Integer),
        req("OperatorId", Kind::Integer),
        req("OperatorStatusRevYrId", Kind::Integer),
        req("GroupName", Kind::String),
        req("OperatorName", Kind::String),
        opt("BusinessUnit", Kind::String),
        req("WellName", Kind::String),
        req("InHouseName", Kind::String),
        req("SchematicUrl", Kind::String),
        req("TimePhaseChartUrl", Kind::String),
        req("Platform", Kind::String),
        req("MTD", Kind::Float),
        opt("TVD", Kind::Float),
        req("PlatformSubseaLand", Kind::String),
        opt("WaterDepth", Kind::Float),
        req("Service", Kind::String),
        req("Multilateral", Kind::String),
        opt("NumberOfLaterals", Kind::Integer),
        req("MultilateralJunctionType", Kind::String),
        req("CompletionType", Kind::String),
        req("NumberOfCompletionStrings", Kind::String),
        opt("CompletionLength", Kind::Float),
        opt("NumberOfCompletionTrips", Kind::Integer),
        opt("MaximumAngle", Kind::Integer),
        req("TubingSize", Kind::String),
        req("TubingWeight", Kind::String),
        req("TubingMaterial", Kind::String),
        req("XmasTreeType", Kind::String),
        req("ArtificialLift", Kind::String),
        opt("IsWorkover", Kind::Boolean),
        opt("IsSuspendedAfterDPR", Kind::Boolean),
        opt("IsSuspendedBeforePerforation", Kind::Boolean),
        opt("IsOtherSuspensions", Kind::Boolean),
        opt("SuspendReEnterDays", Kind::Float),
        req("UniqueWellID", Kind::String),
        opt("PlayType", Kind::String),
        req("DownHoleMonitoring", Kind::String),
        // HPHT flags arrive as strings in CPR, unlike the boolean DPR fields.
        req("IsHighPressure", Kind::String),
        req("IsHighTemperature", Kind::String),
        opt("NumberOfIsolationZonesInIntelligentCompletion", Kind::Integer),
        req("MainCausesOfNPT", Kind::String),
        req("FurtherDetails", Kind::String),
        req("WellDataType", Kind::String),
        opt("IsIntelligentCompletion", Kind::Boolean),
        opt("MaximumAngleThroughReservoir", Kind::Integer),
        opt("LengthOfOldTubingPulled", Kind::Float),
        opt("NumberOfPermanentPackersPulled", Kind::Integer),
        opt("NumberOfRetrievablePackersPulled", Kind::Integer),
        opt("DownHoleActuation", Kind::Integer),
        req("SpecimenWellName", Kind::String),
        opt("CasingDrillingIndicator", Kind::String),
        opt("DesignCO2Percentage", Kind::String),
        opt("FluidInHolePriorCleanup", Kind::String),
        opt("DesignH2S", Kind::String),
        opt("NumberOfIsolationZonesCapableOfSelectiveProduction", Kind::Integer),
        opt("TotalCompletionLength", Kind::Float),
        opt("Days", Kind::Float),
        opt("NPTDays", Kind::Float),
        opt("WoWDays", Kind::Float),
        opt("ProductiveDays", Kind::Float),
        opt("ProductiveDaysPer1000", Kind::Float),
        opt("DaysPer1000MTDm", Kind::Float),
        opt("DaysExcludingExternalNPT", Kind::Float),
        opt("NPTDaysExcludingExternalNPT", Kind::Float),
        req("Comments", Kind::String),
    ];
    fields.extend([
        req("Location", Kind::Object(location())),
        req("Rig", Kind::Object(rig())),
        req("PullOldCompletion", Kind::Object(pull_old_completion())),
        req("RemedialWork", Kind::Object(remedial_work())),
        req("FinalCasing", Kind::Object(final_casing())),
        req("SandControl", Kind::Object(sand_control())),
        req("Completion", Kind::Object(completion_block())),
        req("TubingHanger", Kind::Object(tubing_hanger())),
        req("Perforation", Kind::Object(perforation())),
        req("Stimulation", Kind::Object(stimulation())),
        req("MoveOff", Kind::Object(move_off())),
        req("XmasTree", Kind::Object(xmas_tree())),
        req("OtherOperations", Kind::Object(other_operations())),
        req("Workover", Kind::Object(workover())),
        req("Costs", Kind::Object(costs())),
        req("Dates", Kind::Object(dates())),
    ]);
    Schema::new("Completion", fields)
});

/// The timing quartet most activity blocks share
fn activity_timings() -> Vec<FieldSpec> {
    vec![
        opt("TotalDays", Kind::Float),
        opt("NPT", Kind::Float).with_aliases(&["NPTDaysExcludingWoW"]),
        opt("WOW", Kind::Float).with_aliases(&["WoWDays"]),
        opt("PT", Kind::Float).with_aliases(&["ProductiveDays"]),
    ]
}

fn location() -> Schema {
    Schema::new(
        "Location",
        vec![
            req("FieldBasinArea", Kind::String),
            req("Country", Kind::String),
            req("Region", Kind::String),
            req("SubRegion", Kind::String),
            req("BlockNumber", Kind::String),
        ],
    )
}

fn rig() -> Schema {
    Schema::new(
        "Rig",
        vec![req("Contractor", Kind::String), req("Name", Kind::String)],
    )
}

fn pull_old_completion() -> Schema {
    Schema::new(
        "PullOldCompletion",
        vec![
            opt("DaysPer1000m", Kind::Float),
            opt("TotalDays", Kind::Float).with_aliases(&["TimeIncludingNPTWoW"]),
            opt("NPT", Kind::Float).with_aliases(&["NPTExcludingWoW"]),
            opt("WOW", Kind::Float).with_aliases(&["WoW"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveDays"]),
            opt("ProductiveDaysPer1000", Kind::Float),
        ],
    )
}

fn remedial_work() -> Schema {
    Schema::new(
        "RemedialWork",
        vec![
            opt("TotalDays", Kind::Float).with_aliases(&["TimeIncludingNPTWoW"]),
            opt("NPT", Kind::Float).with_aliases(&["NPTExcludingWoW"]),
            opt("WOW", Kind::Float).with_aliases(&["WoW"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveDays"]),
        ],
    )
}

fn bore_prep() -> Schema {
    let mut fields = activity_timings();
    fields.extend([
        opt("DaysPer1000MTDm", Kind::Float),
        opt("ProductiveDaysPer1000", Kind::Float),
    ]);
    Schema::new("BorePrep", fields)
}

fn final_casing() -> Schema {
    Schema::new(
        "FinalCasing",
        vec![
            req("StringType", Kind::String),
            opt("NumberOfProductionLiners", Kind::Integer),
            req("LinerIsolationType", Kind::String),
            req("Description", Kind::String),
            opt("LinerCement", Kind::String),
            opt("LinerLength", Kind::Float),
            req("LinerSize", Kind::String),
            req("LinerWeight", Kind::String),
            req("LinerMaterial", Kind::String),
            req("RigType", Kind::String),
            req("EquipmentUsed", Kind::String),
            opt("TotalDays", Kind::Float),
            opt("NPT", Kind::Float).with_aliases(&["NPTDaysExcludingWoW"]),
            // This block spells the alias "WoW" where its siblings use "WoWDays".
            opt("WOW", Kind::Float).with_aliases(&["WoW"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveDays"]),
            opt("DaysPer1000m", Kind::Float),
            opt("ProductiveDaysPer1000", Kind::Float),
            req("BorePrep", Kind::Object(bore_prep())),
        ],
    )
}

fn clean_up() -> Schema {
    let mut fields = activity_timings();
    fields.push(opt("DaysPer1000SandCtrlm", Kind::Float));
    Schema::new("CleanUp", fields)
}

fn sand_control() -> Schema {
    let mut fields = vec![
        req("Description", Kind::String),
        opt("Length", Kind::Float),
        opt("Zones", Kind::Integer),
        req("SandScreenSize", Kind::String),
        opt("SandScreenWeight", Kind::String),
        req("SandScreenMaterial", Kind::String),
    ];
    fields.extend(activity_timings());
    fields.extend([
        opt("DaysPer1000m", Kind::Float),
        opt("ProductiveDaysPer1000", Kind::Float),
        req("BorePrep", Kind::Object(bore_prep())),
        req("CleanUp", Kind::Object(clean_up())),
    ]);
    Schema::new("SandControl", fields)
}

fn completion_block() -> Schema {
    let mut fields = vec![
        req("RigType", Kind::String),
        req("Equipment", Kind::String),
    ];
    fields.extend(activity_timings());
    fields.extend([
        opt("DaysPer1000m", Kind::Float),
        opt("ProductiveDaysPer1000", Kind::Float),
    ]);
    Schema::new("Completion", fields)
}

fn tubing_hanger() -> Schema {
    Schema::new("TubingHanger", activity_timings())
}

fn perforation() -> Schema {
    Schema::new(
        "Perforation",
        vec![
            req("RigType", Kind::String),
            req("Equipment", Kind::String),
            req("ConveyanceMethod", Kind::String),
            opt("TotalDays", Kind::Float),
            opt("CumulativePerforatedInterval", Kind::Float),
            opt("NPT", Kind::Float).with_aliases(&["NPTDaysExcludingWoW"]),
            opt("WOW", Kind::Float).with_aliases(&["WoWDays"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveDays"]),
            opt("DaysPer1000m", Kind::Float),
            opt("ProductiveDaysPer1000", Kind::Float),
        ],
    )
}

fn stimulation() -> Schema {
    let mut fields = vec![
        req("Type", Kind::String),
        req("RigType", Kind::String),
        req("Equipment", Kind::String),
    ];
    fields.extend(activity_timings());
    Schema::new("Stimulation", fields)
}

fn move_off() -> Schema {
    Schema::new("MoveOff", activity_timings())
}

fn xmas_tree() -> Schema {
    let mut fields = vec![
        req("RigType", Kind::String),
        req("Equipment", Kind::String),
    ];
    fields.extend(activity_timings());
    Schema::new("XmasTree", fields)
}

fn other_operations() -> Schema {
    let mut fields = vec![
        req("RigType", Kind::String),
        req("Equipment", Kind::String),
    ];
    fields.extend(activity_timings());
    fields.extend([
        req("Types", Kind::String),
        req("TimingsBreakdown", Kind::String),
    ]);
    Schema::new("OtherOperations", fields)
}

fn preparation() -> Schema {
    Schema::new(
        "Preparation",
        vec![
            req("Activities", Kind::String),
            req("ActivitiesTimes", Kind::String),
            opt("TotalDays", Kind::Float).with_aliases(&["TotalDaysIncludingNPTWoW"]),
            opt("NPT", Kind::Float).with_aliases(&["NPTExcludingWoW"]),
            opt("WOW", Kind::Float).with_aliases(&["WoW"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveDays"]),
        ],
    )
}

fn workover() -> Schema {
    Schema::new(
        "Workover",
        vec![
            req("Reasons", Kind::String),
            req("FurtherDetails", Kind::String),
            req("Preparation", Kind::Object(preparation())),
        ],
    )
}

fn costs() -> Schema {
    Schema::new(
        "Costs",
        vec![
            opt("TotalIncludingOverheadsTangibleUSD", Kind::Float),
            opt("TotalExcludingOverheadsIncludingTangibleUSD", Kind::Float),
            opt("TangibleUSD", Kind::Float),
            opt("TotalExcludingTangibleUSD", Kind::Float),
            opt("TotalExcludingTangiblePerTotalDay", Kind::Float),
            opt("TotalExcludingTangiblePerMTD", Kind::Float),
            opt("TangiblePerMTD", Kind::Float),
            req("PreliminaryOrFinal", Kind::String),
            req("LocalCurrency", Kind::String),
            req("ExchangeRate", Kind::Float),
        ],
    )
}

fn dates() -> Schema {
    Schema::new(
        "Dates",
        vec![
            opt("PreviousWorkover", Kind::Timestamp),
            opt("UnTightFrom", Kind::Timestamp),
            opt("Start", Kind::Timestamp),
            req("End", Kind::Timestamp),
            req("Published", Kind::Timestamp),
            req("LastUpdated", Kind::Timestamp),
        ],
    )
}
