//! Students list route.

use leptos::prelude::*;

use crate::entities::STUDENTS;
use crate::pages::records::RecordListPage;

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! { <RecordListPage entity=STUDENTS/> }
}
