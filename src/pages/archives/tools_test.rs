use super::*;

fn tool(worker: Option<i64>, sector: Option<i64>) -> Tool {
    Tool {
        id: 1,
        name: "Amoladora".to_owned(),
        code: Some("HER-001".to_owned()),
        brand: None,
        status: ToolStatus::InUse,
        current_worker_id: worker,
        current_sector_id: sector,
    }
}

fn worker() -> Worker {
    Worker {
        id: 7,
        first_name: "Luis".to_owned(),
        last_name: "Gómez".to_owned(),
        rut_dni: None,
        email: None,
        phone: None,
        job_title: None,
        sector_id: None,
        is_active: true,
    }
}

fn sector() -> Sector {
    Sector { id: 3, name: "Taller".to_owned(), description: None }
}

#[test]
fn custody_prefers_assigned_worker() {
    assert_eq!(custody_label(&tool(Some(7), Some(3)), &[worker()], &[sector()]), "Luis Gómez");
}

#[test]
fn custody_falls_back_to_sector_then_dash() {
    assert_eq!(custody_label(&tool(None, Some(3)), &[worker()], &[sector()]), "Taller");
    assert_eq!(custody_label(&tool(None, None), &[worker()], &[sector()]), "-");
}

#[test]
fn cleaned_drops_blank_code() {
    let input = ToolInput { name: "Taladro".to_owned(), code: Some(" ".to_owned()), ..ToolInput::default() };
    assert_eq!(cleaned(input).unwrap().code, None);
}
