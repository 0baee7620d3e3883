//! EBA NPL template entities.
//!
//! Column sets follow the EBA NPL data templates (counterparty, loan, collateral, enforcement,
//! forbearance, external collection). Tables live in the schema configured by `NPL_SCHEMA`.

use super::types::{Column, PkType, Relation, Resource};

const fn c(name: &'static str) -> Column {
    Column::plain(name)
}

const fn n(name: &'static str) -> Column {
    Column::typed(name, "numeric")
}

pub static COUNTERPARTY_GROUP: Resource = Resource {
    name: "eba_counterparty_group",
    table: "counterparty_group",
    primary_key: "id",
    pk_type: PkType::BigInt,
    columns: &[
        c("id"),
        c("counterparty_group_identifier"),
        c("counterparty_group_name"),
        c("number_of_counterparties"),
        c("creation_date"),
        c("last_change_date"),
    ],
    list_columns: &[
        "id",
        "counterparty_group_identifier",
        "counterparty_group_name",
        "number_of_counterparties",
        "creation_date",
        "last_change_date",
    ],
    relations: &[],
    detail: false,
};

pub static COUNTERPARTY: Resource = Resource {
    name: "eba_counterparty",
    table: "counterparty",
    primary_key: "id",
    pk_type: PkType::BigInt,
    columns: &[
        c("id"),
        c("counterparty_identifier"),
        c("counterparty_group_id"),
        c("counterparty_name"),
        c("counterparty_type"),
        c("legal_type_of_counterparty"),
        c("country_of_residence"),
        c("postcode"),
        c("date_of_incorporation"),
        n("annual_revenue"),
        c("currency_of_annual_revenue"),
        c("external_credit_rating"),
        c("internal_credit_rating"),
        n("probability_of_default"),
        c("insolvency_status"),
        c("creation_date"),
        c("last_change_date"),
    ],
    list_columns: &[
        "id",
        "counterparty_identifier",
        "counterparty_name",
        "counterparty_type",
        "country_of_residence",
    ],
    relations: &[],
    detail: true,
};

pub static LOAN: Resource = Resource {
    name: "eba_loan",
    table: "loan",
    primary_key: "id",
    pk_type: PkType::BigInt,
    columns: &[
        c("id"),
        c("loan_identifier"),
        c("counterparty_id"),
        c("loan_type"),
        c("currency_of_loan"),
        n("principal_balance"),
        n("accrued_interest_balance"),
        n("other_balances"),
        n("total_balance"),
        c("origination_date"),
        c("maturity_date"),
        c("interest_rate_type"),
        n("current_interest_rate"),
        c("legal_status"),
        c("days_past_due"),
        c("date_of_default"),
        c("syndicated_loan"),
        c("creation_date"),
        c("last_change_date"),
    ],
    list_columns: &["id", "loan_identifier", "counterparty_id", "currency_of_loan", "total_balance"],
    relations: &[Relation {
        name: "counterparty",
        column: "counterparty_id",
        target: "eba_counterparty",
    }],
    detail: true,
};

pub static ENFORCEMENT: Resource = Resource {
    name: "eba_enforcement",
    table: "enforcement",
    primary_key: "id",
    pk_type: PkType::BigInt,
    columns: &[
        c("id"),
        c("enforcement_identifier"),
        c("loan_id"),
        c("property_collateral_id"),
        c("court_auction_date"),
        c("enforcement_status"),
        c("enforcement_jurisdiction"),
        n("current_market_value"),
        n("costs_of_enforcement"),
        c("creation_date"),
        c("last_change_date"),
    ],
    list_columns: &[
        "id",
        "enforcement_identifier",
        "loan_id",
        "property_collateral_id",
        "court_auction_date",
        "enforcement_status",
        "enforcement_jurisdiction",
        "current_market_value",
        "costs_of_enforcement",
        "creation_date",
        "last_change_date",
    ],
    relations: &[
        Relation {
            name: "loan",
            column: "loan_id",
            target: "eba_loan",
        },
        Relation {
            name: "property_collateral",
            column: "property_collateral_id",
            target: "eba_property_collateral",
        },
    ],
    detail: false,
};

pub static FORBEARANCE: Resource = Resource {
    name: "eba_forbearance",
    table: "forbearance",
    primary_key: "id",
    pk_type: PkType::BigInt,
    columns: &[
        c("id"),
        c("forbearance_identifier"),
        c("loan_id"),
        c("type_of_forbearance"),
        c("start_date_of_forbearance"),
        c("end_date_of_forbearance"),
        n("principal_forgiveness"),
        c("description_of_forbearance"),
        c("creation_date"),
        c("last_change_date"),
    ],
    list_columns: &[
        "id",
        "forbearance_identifier",
        "loan_id",
        "type_of_forbearance",
        "start_date_of_forbearance",
        "end_date_of_forbearance",
        "principal_forgiveness",
        "description_of_forbearance",
        "creation_date",
        "last_change_date",
    ],
    relations: &[Relation {
        name: "loan",
        column: "loan_id",
        target: "eba_loan",
    }],
    detail: false,
};

pub static NONPROPERTY_COLLATERAL: Resource = Resource {
    name: "eba_nonproperty_collateral",
    table: "nonproperty_collateral",
    primary_key: "id",
    pk_type: PkType::BigInt,
    columns: &[
        c("id"),
        c("protection_identifier"),
        c("loan_id"),
        c("type_of_collateral"),
        n("latest_valuation_amount"),
        c("date_of_latest_valuation"),
        c("currency_of_collateral"),
        c("creation_date"),
        c("last_change_date"),
    ],
    list_columns: &[
        "id",
        "protection_identifier",
        "loan_id",
        "type_of_collateral",
        "latest_valuation_amount",
        "date_of_latest_valuation",
        "currency_of_collateral",
        "creation_date",
        "last_change_date",
    ],
    relations: &[Relation {
        name: "loan",
        column: "loan_id",
        target: "eba_loan",
    }],
    detail: false,
};

pub static PROPERTY_COLLATERAL: Resource = Resource {
    name: "eba_property_collateral",
    table: "property_collateral",
    primary_key: "id",
    pk_type: PkType::BigInt,
    columns: &[
        c("id"),
        c("protection_identifier"),
        c("loan_id"),
        c("type_of_property"),
        c("address_of_property"),
        c("city_of_property"),
        c("postcode_of_property"),
        c("country_of_property"),
        c("currency_of_property"),
        n("latest_valuation_amount"),
        c("date_of_latest_valuation"),
        c("type_of_latest_valuation"),
        n("building_area_m2"),
        c("year_of_construction"),
        c("condition_of_property"),
        c("creation_date"),
        c("last_change_date"),
    ],
    list_columns: &["id", "protection_identifier", "loan_id", "type_of_property"],
    relations: &[Relation {
        name: "loan",
        column: "loan_id",
        target: "eba_loan",
    }],
    detail: true,
};

pub static EXTERNAL_COLLECTION: Resource = Resource {
    name: "eba_external_collection",
    table: "external_collection",
    primary_key: "id",
    pk_type: PkType::BigInt,
    columns: &[
        c("id"),
        c("collection_identifier"),
        c("loan_id"),
        c("collector_name"),
        n("amount_collected"),
        c("date_of_collection"),
        c("creation_date"),
        c("last_change_date"),
    ],
    list_columns: &[
        "id",
        "collection_identifier",
        "loan_id",
        "collector_name",
        "amount_collected",
        "date_of_collection",
        "creation_date",
        "last_change_date",
    ],
    relations: &[Relation {
        name: "loan",
        column: "loan_id",
        target: "eba_loan",
    }],
    detail: false,
};

/// Discovery order.
pub static RESOURCES: &[&Resource] = &[
    &COUNTERPARTY_GROUP,
    &COUNTERPARTY,
    &LOAN,
    &ENFORCEMENT,
    &FORBEARANCE,
    &NONPROPERTY_COLLATERAL,
    &PROPERTY_COLLATERAL,
    &EXTERNAL_COLLECTION,
];
