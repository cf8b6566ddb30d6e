use super::aggregate::{Client, ClientStatus, SecurityScore};
use crate::shared::dates::ymd;
use crate::shared::list_view::RecordId;

/// Sample clients the clients page starts with.
pub fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: RecordId(1),
            name: "Sunrise Family Dental".into(),
            business_type: "Healthcare".into(),
            email: "office@sunrisedental.example".into(),
            phone: "(555) 201-4410".into(),
            address: "18 Orchard Ave, Springfield".into(),
            contact_person: "Maria Lopez".into(),
            consultant_count: 2,
            security_score: SecurityScore::new(85),
            status: ClientStatus::Active,
            join_date: ymd(2023, 9, 12),
        },
        Client {
            id: RecordId(2),
            name: "Main Street Books".into(),
            business_type: "Retail".into(),
            email: "hello@mainstreetbooks.example".into(),
            phone: "(555) 348-0921".into(),
            address: "402 Main St, Springfield".into(),
            contact_person: "Tom Becker".into(),
            consultant_count: 1,
            security_score: SecurityScore::new(72),
            status: ClientStatus::Active,
            join_date: ymd(2023, 10, 3),
        },
        Client {
            id: RecordId(3),
            name: "Harbor Grill".into(),
            business_type: "Restaurant".into(),
            email: "manager@harborgrill.example".into(),
            phone: "(555) 610-7735".into(),
            address: "7 Pier Rd, Bayview".into(),
            contact_person: "Priya Natarajan".into(),
            consultant_count: 0,
            security_score: SecurityScore::UNASSESSED,
            status: ClientStatus::PendingReview,
            join_date: ymd(2024, 1, 8),
        },
        Client {
            id: RecordId(4),
            name: "Valley Legal Group".into(),
            business_type: "Professional Services".into(),
            email: "it@valleylegal.example".into(),
            phone: "(555) 777-1290".into(),
            address: "1200 Center Blvd, Suite 300, Springfield".into(),
            contact_person: "David Chen".into(),
            consultant_count: 3,
            security_score: SecurityScore::new(91),
            status: ClientStatus::Active,
            join_date: ymd(2023, 6, 21),
        },
        Client {
            id: RecordId(5),
            name: "Community Food Pantry".into(),
            business_type: "Non-profit".into(),
            email: "volunteer@foodpantry.example".into(),
            phone: "(555) 903-4412".into(),
            address: "55 Elm St, Riverton".into(),
            contact_person: "Grace Okafor".into(),
            consultant_count: 0,
            security_score: SecurityScore::UNASSESSED,
            status: ClientStatus::PendingApproval,
            join_date: ymd(2024, 2, 14),
        },
    ]
}
