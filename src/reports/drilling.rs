//! Drilling Performance Review (DPR) schema

use super::{opt, req};
use crate::schema::{expand_rig_type, FieldKind as Kind, Schema};
use once_cell::sync::Lazy;

/// The DPR record schema
pub static DRILLING: Lazy<Schema> = Lazy::new(|| {
    let mut fields = vec![
        req("WellId", Kind::Integer),
        req("OperatorId", Kind::Integer),
        req("OperatorStatusRevYrId", Kind::Integer),
        req("Quarter", Kind::Integer),
        req("Year", Kind::Integer),
        req("GroupName", Kind::String),
        req("OperatorName", Kind::String),
        opt("BusinessUnit", Kind::String),
        opt("PreviousOperatorName", Kind::String),
        req("WellName", Kind::String),
        req("InHouseName", Kind::String),
        opt("TimeDepthChartUrl", Kind::String),
        opt("Platform", Kind::String),
        opt("OwnerDrilled", Kind::String),
        req("WellType", Kind::String),
        opt("IsHighPressure", Kind::Boolean),
        opt("IsHighTemperature", Kind::Boolean),
        opt("HoleType", Kind::String),
        opt("LocatorWellOrShallowGasPilotHole", Kind::String),
        opt("IsMultilateral", Kind::Boolean),
        opt("NumberOfLaterals", Kind::Integer),
        opt("IsReSpud", Kind::Boolean),
        opt("OriginalName", Kind::String),
        req("RigType", Kind::String),
        opt("DrillMethod", Kind::String),
        opt("WaterDepth", Kind::Float),
        req("SpudDepth", Kind::Float),
        req("MTD", Kind::Float),
        req("DrilledInterval", Kind::Float),
        opt("TVD", Kind::Float),
        opt("MaximumAngle", Kind::Integer),
        opt("HorizontalSectionLength", Kind::Integer),
        opt("ComplexRatio", Kind::Float),
        opt("FinalBitSize", Kind::Float),
        opt("PressureBalance", Kind::String),
        opt("DrillingFluid", Kind::String),
        opt("TDMudWeight", Kind::Float),
        opt("MaximumMudWeight", Kind::Float),
        opt("CuttingsDisposalMethod", Kind::String),
        opt("CoringDays", Kind::Float),
        opt("CoringInterval", Kind::Float),
        opt("LogDaysNotTD", Kind::Float),
        opt("LogDaysTD", Kind::Float),
        opt("PilotHoleEnlargementDays", Kind::Float),
        opt("PilotHoleEnlargementInterval", Kind::Float),
        opt("AgeOfDeepestReservoir", Kind::String),
        opt("SlotRecoveryPreSpudDays", Kind::Float),
        opt("BatchCampaignDrilled", Kind::String),
        opt("NumberOfWellSuspensions", Kind::Integer),
        opt("SuspensionReEntryDays", Kind::Float),
        opt("TotalWellSiteDays", Kind::Float),
        opt("WellStatus", Kind::String),
        opt("PAOrSUDays", Kind::Float),
        opt("TotalWoWDuringDryHoleDays", Kind::Float),
        opt("TotalNPTDuringDryHoleDays", Kind::Float),
        req("FurtherDetails", Kind::String),
        req("Comments", Kind::String),
        opt("RigMooringSystem", Kind::String),
        opt("GOMAPINumber", Kind::String),
        opt("Salt", Kind::String),
        opt("TVDSaltStart", Kind::Float),
        opt("TVDSaltEnd", Kind::Float),
        opt("RigName", Kind::String),
        opt("MultilateralJunctionType", Kind::String),
        req("WellDataType", Kind::String),
        opt("NumberOfContingencyGeologicalSidetracks", Kind::Integer),
        // Vendor column is misspelled; the alias records the typo.
        opt("UnusedLengthContingencyGeologicalSidetracks", Kind::Integer)
            .with_aliases(&["UnusedLengthContingencyGeologicaSidetracks"]),
        opt("UnusedLengthLocatorWell", Kind::Integer),
        opt("GeologicalSidetrackWhipstockDays", Kind::Float),
        opt("ExtendedReach", Kind::String),
        opt("DrillFloorElevation", Kind::Float),
        opt("IsConductorInstalledByDrillingRig", Kind::Boolean),
        opt("RigContractorNPT", Kind::Float),
        opt("ServiceCompanyNPT", Kind::Float),
        opt("OperatorProblemsNPT", Kind::Float),
        opt("ExternalProblemsNPT", Kind::Float),
        opt("DownholeProblemsNPT", Kind::Float),
        opt("CompletionDays", Kind::Float),
        opt("SpecimenWellName", Kind::String),
        opt("RigContractor", Kind::String),
        opt("RigMoveDays", Kind::Float),
        opt("IsRigMoveWithinField", Kind::Boolean),
        opt("CasingDrilling", Kind::String),
        opt("NumberOfMechanicalSidetracks", Kind::Integer),
        opt("IsSplitConductor", Kind::Boolean),
        opt("ExpandableCasingCount", Kind::Integer),
        opt("DryHoleDaysExcludingCoringLogging", Kind::Float),
        opt("MetresPerDryHoleDayExcludingCoringLogging", Kind::Float),
        opt("DryHoleDaysExcludingCoringLoggingPer1000m", Kind::Float),
        opt("WoWPer1000m", Kind::Float),
        opt("NPTPer1000m", Kind::Float),
        opt("ProductiveDaysPer1000m", Kind::Float),
        opt("WoWPercentageOfDryHoleDays", Kind::Float),
        opt("NPTPercentageOfDryHoleDays", Kind::Float),
        req("MetresPerDryHoleDay", Kind::Float),
        req("DryHoleDaysPer1000m", Kind::Float),
        req("PlayType", Kind::String),
        opt("IsDualActivityRig", Kind::Boolean),
        opt("LogDaysTotal", Kind::Float),
        req("UniqueWellID", Kind::String),
        opt("ProductiveDays", Kind::Float),
        opt("DaysSpentMooringDeMooring", Kind::Float),
        opt("WoWDuringMooringDeMooring", Kind::Float),
        opt("BurialDepth", Kind::Float),
        opt("SlotRecoveryIncludesAbandonmentTime", Kind::String),
        opt("IsComplexWellPath", Kind::Boolean),
        opt("DeMoorDays", Kind::Float),
        req("DryHoleDaysExcludingCoring", Kind::Float),
        req("DryHoleDaysExcludingCoringPer1000m", Kind::Float),
        opt("IsFEWD", Kind::Boolean),
        opt("MajorNPTEvents", Kind::String),
        req("MetresPerDryHoleDayExcludingCoring", Kind::Float),
        opt("MoorDays", Kind::Float),
        opt("NewTechniques", Kind::String),
        opt("IsSlotRecoveryPreSpudOffline", Kind::Boolean),
        opt("OtherOperationsDays", Kind::Float),
        opt("RDI2_1", Kind::Integer),
        opt("REDD2_0", Kind::Float),
        opt("RDI3_1", Kind::Float),
        opt("REDD3_1", Kind::Float),
        opt("WoWBeforeDeMoorDays", Kind::Float),
        opt("WoWDeMoorDays", Kind::Float),
        opt("WoWMoorDays", Kind::Float),
        req("DryHoleDays", Kind::Float),
    ];
    fields.extend([
        req("Location", Kind::Object(location())),
        req("Casings", Kind::Object(casings())),
        req("Costs", Kind::Object(costs())),
        req("TimeDepth", Kind::Object(time_depth())),
        req("Dates", Kind::Object(dates())),
    ]);
    Schema::new("Drilling", fields).with_normalizer("RigType", expand_rig_type)
});

fn location() -> Schema {
    Schema::new(
        "Location",
        vec![
            req("Country", Kind::String),
            req("Region", Kind::String),
            req("SubRegion", Kind::String),
            req("OffshoreLand", Kind::String),
            opt("FieldBasinArea", Kind::String),
            opt("BlockNumber", Kind::String),
            req("Latitude", Kind::String),
            req("Longitude", Kind::String),
            opt("DecimalLatitude", Kind::Float),
            opt("DecimalLongitude", Kind::Float),
        ],
    )
}

fn casings() -> Schema {
    Schema::new(
        "Casings",
        vec![
            opt("PreExistingCasings", Kind::String),
            opt("NewCasings", Kind::String),
            opt("TotalCasingCount", Kind::Integer),
            opt("NewCasingCount", Kind::Integer),
            // Vendor column is misspelled; the alias records the typo.
            req("PreExistingCasingSizes", Kind::List(Box::new(Kind::String)))
                .with_aliases(&["PreExisitingCasingSizes"]),
            req("NewCasingSizes", Kind::List(Box::new(Kind::String))),
        ],
    )
}

fn costs() -> Schema {
    Schema::new(
        "Costs",
        vec![
            req("PerDryHoleDayUSD", Kind::Float),
            req("DryHoleCostUSD", Kind::Float),
            req("DryHolePerMetreUSD", Kind::Float),
            opt("TotalWellUSD", Kind::Float),
            opt("TotalPerMetreUSD", Kind::Float),
            opt("TotalPerTotalDayUSD", Kind::Float),
            req("LocalCurrency", Kind::String),
            req("ExchangeRate", Kind::Float),
            opt("Complete", Kind::String),
        ],
    )
}

fn time_depth_row() -> Schema {
    Schema::new(
        "TimeDepthRow",
        vec![
            req("Day", Kind::Integer),
            req("Depth", Kind::Float),
            req("HoleSize", Kind::Float),
        ],
    )
}

fn time_depth() -> Schema {
    Schema::new(
        "TimeDepth",
        vec![req(
            "TimeDepth",
            Kind::List(Box::new(Kind::Object(time_depth_row()))),
        )],
    )
}

fn dates() -> Schema {
    Schema::new(
        "Dates",
        vec![
            opt("Spud", Kind::Timestamp),
            req("DryHoleEnd", Kind::Timestamp),
            req("Published", Kind::Timestamp),
            req("LastUpdated", Kind::Timestamp),
            opt("EndOfWellOperations", Kind::Timestamp),
            opt("UnTightFrom", Kind::Timestamp),
        ],
    )
}
