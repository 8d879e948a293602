//! Abandonment Performance Review (APR) schema
//!
//! The three phase blocks share the same work-facility breakdown
//! (DES/NonDES/PreparatoryWork plus the including/excluding-prep
//! subdivisions) and differ only in their own leading fields. Note the
//! alias spread on the waiting-on-weather field: `WoW` in most blocks but
//! `Wow` inside NonDES.

use super::{opt, req};
use crate::schema::{expand_rig_type, FieldKind as Kind, FieldSpec, Schema};
use once_cell::sync::Lazy;

/// The APR record schema
pub static ABANDONMENT: Lazy<Schema> = Lazy::new(|| {
    let mut fields = vec![
        req("WellId", Kind::Integer),
        req("OperatorId", Kind::Integer),
        req("OperatorStatusRevYrId", Kind::Integer),
        req("Year", Kind::Integer),
        req("Quarter", Kind::Integer),
        req("GroupName", Kind::String),
        req("OperatorName", Kind::String),
        opt("BusinessUnit", Kind::String),
        opt("PreviousOperatorName", Kind::String),
        req("WellName", Kind::String),
        req("InHouseName", Kind::String),
        req("WellCategory", Kind::String),
        req("IsReAbandonment", Kind::Boolean),
        opt("NumZonesToBeSeparated", Kind::Integer),
        req("FluidsInPermeableZone", Kind::String),
        opt("IsH2SPresent", Kind::Boolean),
        opt("IsCO2Present", Kind::Boolean),
        opt("LowRadioActiveScale", Kind::String),
        req("HPHTWell", Kind::String),
        req("CompletionType", Kind::String),
        req("ArtificialLift", Kind::String),
        req("TypesOfDeepLines", Kind::String),
        opt("IsMultilateral", Kind::Boolean),
        req("TubularAccess", Kind::String),
        opt("AnnuliWithIntegrityIssues", Kind::Integer),
        opt("QualityOfWellRecords", Kind::String),
        req("NumWellsInCampaign", Kind::String),
        opt("UniqueWellID", Kind::String),
        req("CampaignName", Kind::String),
        req("Comments", Kind::String),
        opt("IsSpoolTypeWellhead", Kind::Boolean),
        opt("WaterDepth", Kind::Float),
        req("CausesOfMajorNPT", Kind::String),
        req("DescriptionOfWorkscope", Kind::String),
        req("AbandonmentComplexity", Kind::String),
        req("IsRequiredDiverSupportInWater", Kind::Boolean),
        opt("TreeType", Kind::String),
        req("Days", Kind::Float).with_aliases(&["Time"]),
        req("NPT", Kind::Float),
        req("WOW", Kind::Float).with_aliases(&["WoW"]),
        req("PT", Kind::Float).with_aliases(&["ProductiveTime"]),
        req("HasPhase1Data", Kind::Boolean),
        req("HasPhase2Data", Kind::Boolean),
        req("HasPhase3Data", Kind::Boolean),
    ];
    fields.extend([
        req("Location", Kind::Object(location())),
        req("PreparatoryWork", Kind::Object(preparatory_work())),
        req("Phase1", Kind::Object(phase1())),
        req("Phase2", Kind::Object(phase2())),
        req("Phase3", Kind::Object(phase3())),
        req("IncludingPrep", Kind::Object(subdivision())),
        req("ExcludingPrep", Kind::Object(subdivision())),
        req("Costs", Kind::Object(costs())),
        req("Deepwater", Kind::Object(deepwater())),
        req("Dates", Kind::Object(dates())),
    ]);
    Schema::new("Abandonment", fields)
});

fn location() -> Schema {
    Schema::new(
        "Location",
        vec![req("Region", Kind::String), req("Country", Kind::String)],
    )
}

fn preparatory_work() -> Schema {
    Schema::new(
        "PreparatoryWork",
        vec![
            opt("PreWorkscopeOperations", Kind::String),
            opt("RigType", Kind::String),
            opt("Days", Kind::Float),
            opt("NPT", Kind::Float),
            opt("WOW", Kind::Float).with_aliases(&["WoW"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveTime"]),
            opt("Cost", Kind::Float),
        ],
    )
    .with_normalizer("RigType", expand_rig_type)
}

fn costs_variant() -> Schema {
    Schema::new(
        "Costs",
        vec![opt("PerDay", Kind::Float), opt("Total", Kind::Float)],
    )
}

fn subdivision() -> Schema {
    Schema::new(
        "Subdivision",
        vec![
            opt("Days", Kind::Float),
            opt("NPT", Kind::Float),
            opt("WOW", Kind::Float).with_aliases(&["WoW"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveTime"]),
            req("Costs", Kind::Object(costs_variant())),
        ],
    )
}

fn costs() -> Schema {
    Schema::new(
        "Costs",
        vec![
            req("ExchangeRate", Kind::Float),
            req("Currency", Kind::String),
            req("FinalCosts", Kind::String),
            req("CompletenessOfCosts", Kind::String),
        ],
    )
}

fn deepwater() -> Schema {
    Schema::new(
        "Deepwater",
        vec![
            // Vendor column is misspelled; the alias records the typo.
            opt("DeviationFromGuidelines", Kind::Boolean)
                .with_aliases(&["DeviationFromGuidlines"]),
            opt("Phase3OperationsIntended", Kind::Boolean),
        ],
    )
}

fn dates() -> Schema {
    Schema::new(
        "Dates",
        vec![
            req("WorkscopeCompleted", Kind::String),
            req("Published", Kind::Timestamp),
            req("LastUpdated", Kind::Timestamp),
        ],
    )
}

fn des() -> Schema {
    Schema::new(
        "DES",
        vec![
            opt("WorkFacilityUsed", Kind::String),
            opt("Days", Kind::Float),
            opt("NPT", Kind::Float),
            opt("WOW", Kind::Float).with_aliases(&["WoW"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveTime"]),
        ],
    )
}

fn non_des() -> Schema {
    Schema::new(
        "NonDES",
        vec![
            opt("Equipment", Kind::String).with_aliases(&["HeavyRotatingEquipmentUsed"]),
            opt("Days", Kind::Float),
            opt("NPT", Kind::Float),
            opt("WOW", Kind::Float).with_aliases(&["Wow"]),
            opt("PT", Kind::Float).with_aliases(&["ProductiveTime"]),
        ],
    )
}

/// The work-facility breakdown shared by all three phases
fn phase_shared() -> Vec<FieldSpec> {
    vec![
        req("DES", Kind::Object(des())),
        req("NonDES", Kind::Object(non_des())),
        req("PreparatoryWork", Kind::Object(preparatory_work())),
        req("ExcludingPrep", Kind::Object(subdivision())),
        req("IncludingPrep", Kind::Object(subdivision())),
    ]
}

fn phase1() -> Schema {
    let mut fields = vec![
        opt("AngleAtDeepestCementPlug", Kind::Integer),
        opt("IsCombinationBarrierSet", Kind::Boolean),
        opt("IsDiverInWater", Kind::Boolean),
        opt("IsDiverSupport", Kind::Boolean),
        opt("MaximumAngleAboveDeepestCementPlug", Kind::Float),
        opt("DepthOfDeepestCementPlug", Kind::Float),
        opt("IsThroughTubingAbandonment", Kind::Boolean),
        opt("NumPermanentCementPlugsSet", Kind::Integer),
        opt("NumCasingStringsCutAndRecovered", Kind::Integer),
        opt("NumCasingSectionsMilled", Kind::Integer),
        opt("NumPlugsOverLinerTopsCasingStubs", Kind::Integer),
        opt("NumPackersRemovedByMilling", Kind::Integer),
        opt("IsComplete", Kind::Boolean),
        opt("ComplexityCategory", Kind::String),
        opt("IsWorkFacilityBroughtInSpecifically", Kind::Boolean),
        opt("NumCementPlugs", Kind::Integer),
        opt("IsDeepestCementPlugAngleGreater60", Kind::Boolean),
        opt("AnnulusRemediationTechniques", Kind::String),
        opt("BreakdownOfPreparatoryWorkTimePerWorkFacility", Kind::String),
        opt("PlugBarrierTypeSet", Kind::String),
    ];
    fields.extend(phase_shared());
    Schema::new("Phase1", fields)
}

fn phase2() -> Schema {
    let mut fields = vec![
        opt("IsWorkFacilityBroughtInSpecifically", Kind::Boolean),
        opt("NumCementPlugs", Kind::Integer),
        opt("IsDeepestCementPlugAngleGreater60", Kind::Boolean),
        opt("AnnulusRemediationTechniques", Kind::String),
        opt("BreakdownOfPreparatoryWorkTimePerWorkFacility", Kind::String),
        opt("PlugBarrierTypeSet", Kind::String),
        opt("DepthOfDeepestIntermediateCementPlug", Kind::Float),
        opt("IsThroughTubingAbandonment", Kind::Boolean),
        opt("NumPermanentCementPlugsSet", Kind::Integer),
        opt("NumCasingStringsCutAndRecovered", Kind::Integer),
        opt("NumCasingSectionsMilled", Kind::Integer),
        opt("NumPlugsOverLinerTopsCasingStubs", Kind::Integer),
        opt("NumPackersRemovedByMilling", Kind::Integer),
        opt("IsComplete", Kind::Boolean),
        req("ComplexityCategory", Kind::String),
        // Unlike Phase1, the vendor reports this angle fractionally here.
        opt("AngleAtDeepestCementPlug", Kind::Float),
        opt("IsCombinationBarrierSet", Kind::Boolean),
        opt("IsDiverInWater", Kind::Boolean),
        opt("IsDiverSupport", Kind::Boolean),
        opt("MaximumAngleAboveDeepestCementPlug", Kind::Float),
    ];
    fields.extend(phase_shared());
    Schema::new("Phase2", fields)
}

fn phase3() -> Schema {
    let mut fields = vec![
        opt("IsComplete", Kind::Boolean),
        req("ComplexityCategory", Kind::String),
        opt("IsWorkFacilityBroughtInSpecifically", Kind::Boolean),
        opt("BreakdownOfPreparatoryWorkTimePerWorkFacility", Kind::String),
        opt("IsDiverInWater", Kind::Boolean),
        opt("IsDiverSupport", Kind::Boolean),
        req("RemovalOfSurfaceTubularsIncluded", Kind::String),
    ];
    fields.extend(phase_shared());
    Schema::new("Phase3", fields)
}
