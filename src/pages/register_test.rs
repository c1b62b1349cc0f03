use super::*;

fn form() -> RegisterForm {
    RegisterForm {
        name: " Planta Norte ".to_owned(),
        admin_email: " admin@plantanorte.com".to_owned(),
        password: "clave-segura".to_owned(),
        confirm: "clave-segura".to_owned(),
    }
}

#[test]
fn to_request_trims_name_and_email() {
    let request = form().to_request().unwrap();
    assert_eq!(request.name, "Planta Norte");
    assert_eq!(request.admin_email, "admin@plantanorte.com");
    assert_eq!(request.admin_password, "clave-segura");
}

#[test]
fn to_request_rejects_mismatched_passwords() {
    let mismatched = RegisterForm { confirm: "otra".to_owned(), ..form() };
    assert_eq!(mismatched.to_request(), Err("Las contraseñas no coinciden."));
}

#[test]
fn to_request_requires_every_field() {
    let blank = RegisterForm { name: "   ".to_owned(), ..form() };
    assert_eq!(blank.to_request(), Err("Completa todos los campos."));
}
