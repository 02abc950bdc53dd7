//! Document types shown by the dashboard and how each is listed and detailed.

use crate::state::detail::{DetailField, DetailLayout, DetailSection};
use crate::state::records::ListSpec;

pub const STUDENT_FIELDS: &[&str] = &[
    "name",
    "first_name",
    "middle_name",
    "last_name",
    "student_email_id",
    "student_mobile_number",
    "joining_date",
    "image",
    "date_of_birth",
    "blood_group",
    "gender",
    "nationality",
    "student_applicant",
    "student_name",
    "address_line_1",
    "address_line_2",
    "pincode",
    "city",
    "state",
    "country",
    "customer",
    "customer_group",
    "leaving_certificate_number",
    "date_of_leaving",
    "reason_for_leaving",
    "guardians",
];

pub const STUDENT_LIST: ListSpec = ListSpec {
    doctype: "Student",
    fields: STUDENT_FIELDS,
    search_field: "student_name",
};

/// Leading table column: avatar, title fields and one secondary line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadColumn {
    pub header: &'static str,
    pub secondary_field: &'static str,
}

/// A table column rendering one field through `display_value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
}

pub const STUDENT_LEAD: LeadColumn = LeadColumn { header: "Student", secondary_field: "student_name" };

/// Columns after the leading avatar/name column.
pub const STUDENT_COLUMNS: &[Column] = &[
    Column { header: "Email", field: "student_email_id" },
    Column { header: "City", field: "city" },
    Column { header: "Phone", field: "student_mobile_number" },
];

pub const STUDENT_DETAIL: DetailLayout = DetailLayout {
    title_fields: &["first_name", "last_name"],
    subtitle_fields: &["student_email_id", "student_mobile_number"],
    initial_field: "first_name",
    image_field: "image",
    sections: &[
        DetailSection::Fields {
            heading: "Personal Info",
            fields: &[
                DetailField { label: "Middle Name", field: "middle_name" },
                DetailField { label: "Joining Date", field: "joining_date" },
                DetailField { label: "Date of Birth", field: "date_of_birth" },
                DetailField { label: "Blood Group", field: "blood_group" },
                DetailField { label: "Gender", field: "gender" },
                DetailField { label: "Nationality", field: "nationality" },
            ],
        },
        DetailSection::Fields {
            heading: "Address",
            fields: &[
                DetailField { label: "Address Line 1", field: "address_line_1" },
                DetailField { label: "Address Line 2", field: "address_line_2" },
                DetailField { label: "Pincode", field: "pincode" },
                DetailField { label: "City", field: "city" },
                DetailField { label: "State", field: "state" },
                DetailField { label: "Country", field: "country" },
            ],
        },
        DetailSection::List { heading: "Guardians", field: "guardians" },
        DetailSection::Fields {
            heading: "Exit Info",
            fields: &[
                DetailField { label: "Customer", field: "customer" },
                DetailField { label: "Customer Group", field: "customer_group" },
                DetailField { label: "Leaving Certificate No.", field: "leaving_certificate_number" },
                DetailField { label: "Date of Leaving", field: "date_of_leaving" },
                DetailField { label: "Reason for Leaving", field: "reason_for_leaving" },
            ],
        },
    ],
};

/// Everything a list page needs to show one document type.
#[derive(Clone, Copy, Debug)]
pub struct EntityView {
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub empty_message: &'static str,
    pub list: ListSpec,
    pub lead: LeadColumn,
    pub columns: &'static [Column],
    pub detail: DetailLayout,
}

pub const STUDENTS: EntityView = EntityView {
    title: "Students",
    search_placeholder: "Search students...",
    empty_message: "No students found.",
    list: STUDENT_LIST,
    lead: STUDENT_LEAD,
    columns: STUDENT_COLUMNS,
    detail: STUDENT_DETAIL,
};
