use super::aggregate::{Consultant, ConsultantRole, ConsultantStatus};
use crate::shared::dates::ymd;
use crate::shared::list_view::RecordId;

#[allow(clippy::too_many_arguments)]
fn consultant(
    id: u32,
    name: &str,
    email: &str,
    role: ConsultantRole,
    status: ConsultantStatus,
    client_count: u32,
    affiliation: &str,
    join_date: (i32, u32, u32),
) -> Consultant {
    Consultant {
        id: RecordId(id),
        name: name.into(),
        email: email.into(),
        role,
        status,
        client_count,
        affiliation: affiliation.into(),
        join_date: ymd(join_date.0, join_date.1, join_date.2),
    }
}

pub fn seed_consultants() -> Vec<Consultant> {
    use ConsultantRole::*;
    use ConsultantStatus::*;

    vec![
        consultant(
            1,
            "Alex Rivera",
            "arivera@university.example",
            StudentConsultant,
            Active,
            2,
            "Computer Science",
            (2023, 8, 28),
        ),
        consultant(
            2,
            "Dr. Helen Park",
            "hpark@university.example",
            FacultyAdvisor,
            Active,
            4,
            "Information Systems",
            (2022, 1, 10),
        ),
        consultant(
            3,
            "Jordan Smith",
            "jsmith@university.example",
            StudentConsultant,
            OnLeave,
            1,
            "Cybersecurity",
            (2023, 9, 4),
        ),
        consultant(
            4,
            "Samira Haddad",
            "shaddad@university.example",
            SeniorConsultant,
            Active,
            3,
            "Cybersecurity",
            (2022, 9, 1),
        ),
        consultant(
            5,
            "Chris Morgan",
            "cmorgan@university.example",
            StudentConsultant,
            Active,
            1,
            "Business Administration",
            (2024, 1, 15),
        ),
        consultant(
            6,
            "Dr. Rafael Ortiz",
            "rortiz@university.example",
            FacultyAdvisor,
            Inactive,
            0,
            "Computer Science",
            (2021, 8, 30),
        ),
        consultant(
            7,
            "Nina Volkova",
            "nvolkova@university.example",
            SeniorConsultant,
            OnLeave,
            2,
            "Information Systems",
            (2022, 5, 16),
        ),
        consultant(
            8,
            "Ethan Brooks",
            "ebrooks@university.example",
            StudentConsultant,
            Active,
            0,
            "Computer Science",
            (2024, 2, 5),
        ),
    ]
}
