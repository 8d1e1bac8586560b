use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Datelike;
use sedapal_core::{AppError, AppResult};
use sedapal_domain::UserRole;

use super::{
    ActivityAssignedNotice, ActivityDetails, CredentialsNotice, CredentialsWithActivityNotice,
    DeliverableApprovedNotice, DeliverableFlaggedNotice, EmailService, NotificationService,
    NotificationSettings, OutboundEmail, SystemAssignedNotice, TEST_EMAIL_BODY,
    TEST_EMAIL_SUBJECT, UserCreatedNotice,
};

#[derive(Default)]
struct RecordingEmailService {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingEmailService {
    fn sent(&self) -> Vec<OutboundEmail> {
        self.sent
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send_email(
        &self,
        to: &[String],
        subject: &str,
        text_body: &str,
        html_body: Option<&str>,
    ) -> AppResult<()> {
        self.sent
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock email state: {error}")))?
            .push(OutboundEmail {
                to: to.to_vec(),
                subject: subject.to_owned(),
                text_body: text_body.to_owned(),
                html_body: html_body.map(str::to_owned),
            });
        Ok(())
    }
}

struct FailingEmailService;

#[async_trait]
impl EmailService for FailingEmailService {
    async fn send_email(
        &self,
        _to: &[String],
        _subject: &str,
        _text_body: &str,
        _html_body: Option<&str>,
    ) -> AppResult<()> {
        Err(AppError::Internal("connection refused".to_owned()))
    }
}

fn settings() -> NotificationSettings {
    NotificationSettings {
        frontend_url: "http://localhost:5173".to_owned(),
        logo_url: Some("https://cdn.example.com/sedapal.png".to_owned()),
    }
}

fn service() -> (NotificationService, Arc<RecordingEmailService>) {
    let email = Arc::new(RecordingEmailService::default());
    (NotificationService::new(email.clone(), settings()), email)
}

fn only_message(email: &RecordingEmailService) -> OutboundEmail {
    let mut sent = email.sent();
    assert_eq!(sent.len(), 1, "expected exactly one email");
    match sent.pop() {
        Some(message) => message,
        None => panic!("no email recorded"),
    }
}

#[tokio::test]
async fn credentials_subject_depends_on_role() {
    let cases = [
        (
            UserRole::Admin,
            "🔐 Acceso como Administrador - Sistema SEDAPAL",
            "Administrador",
        ),
        (
            UserRole::User,
            "🔐 Acceso como Usuario - Sistema SEDAPAL",
            "Usuario",
        ),
        (
            UserRole::SuperAdmin,
            "🔐 Acceso al Sistema SEDAPAL",
            "Super Administrador",
        ),
    ];

    for (role, subject, label) in cases {
        let (service, email) = service();
        let result = service
            .send_credentials(&CredentialsNotice {
                email: "ana@sedapal.com.pe".to_owned(),
                given_name: "ana".to_owned(),
                family_name: "lopez".to_owned(),
                password: "UserAL42".to_owned(),
                role,
            })
            .await;
        assert!(result.is_ok());

        let message = only_message(&email);
        assert_eq!(message.to, vec!["ana@sedapal.com.pe".to_owned()]);
        assert_eq!(message.subject, subject);
        assert!(message.text_body.contains("Hola ana lopez,"));
        assert!(message.text_body.contains("Contraseña: UserAL42"));
        assert!(message.text_body.contains(&format!("Rol: {label}")));
        assert!(message.text_body.contains("http://localhost:5173/login"));
    }
}

#[tokio::test]
async fn html_body_carries_footer_year_and_logo() {
    let (service, email) = service();
    let result = service
        .send_credentials(&CredentialsNotice {
            email: "ana@sedapal.com.pe".to_owned(),
            given_name: "Ana".to_owned(),
            family_name: "Lopez".to_owned(),
            password: "UserAL42".to_owned(),
            role: UserRole::User,
        })
        .await;
    assert!(result.is_ok());

    let html = only_message(&email).html_body.unwrap_or_default();
    let year = chrono::Utc::now().year();
    assert!(html.contains(&format!("© {year} SEDAPAL - Sistema de Gestión Institucional")));
    assert!(html.contains("Este es un correo automático, por favor no responder."));
    assert!(html.contains(r#"<img src="https://cdn.example.com/sedapal.png""#));
    assert!(!html.contains("{{"));
}

#[tokio::test]
async fn html_values_are_escaped() {
    let (service, email) = service();
    let result = service
        .send_system_assigned(&SystemAssignedNotice {
            email: Some("admin@sedapal.com.pe".to_owned()),
            admin_name: Some("<script>x</script>".to_owned()),
            system_abbreviation: Some("SIGA".to_owned()),
            system_name: None,
        })
        .await;
    assert!(result.is_ok());

    let message = only_message(&email);
    let html = message.html_body.unwrap_or_default();
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
    assert_eq!(message.subject, "🛠️ Sistema asignado: SIGA");
    assert!(message.text_body.contains("Nombre: Sistema"));
}

#[tokio::test]
async fn system_assigned_without_abbreviation_uses_placeholders() {
    let (service, email) = service();
    let result = service
        .send_system_assigned(&SystemAssignedNotice {
            email: Some("admin@sedapal.com.pe".to_owned()),
            admin_name: Some("Luis".to_owned()),
            system_abbreviation: None,
            system_name: Some("Gestión Comercial".to_owned()),
        })
        .await;
    assert!(result.is_ok());

    let message = only_message(&email);
    assert_eq!(message.subject, "🛠️ Sistema asignado: ");
    assert!(message.text_body.contains("Sigla: N/A"));
}

#[tokio::test]
async fn activity_assigned_defaults_missing_due_date() {
    let (service, email) = service();
    let result = service
        .send_activity_assigned(&ActivityAssignedNotice {
            email: Some("ana@sedapal.com.pe".to_owned()),
            user_name: Some("Ana Lopez".to_owned()),
            activity_name: Some("Inventario de activos".to_owned()),
            system_abbreviation: Some("SIGA".to_owned()),
            team_name: Some("Equipo TI".to_owned()),
            quarter: 2,
            due_date: None,
        })
        .await;
    assert!(result.is_ok());

    let message = only_message(&email);
    assert_eq!(
        message.subject,
        "📝 Nueva Actividad Asignada - Sistema SEDAPAL"
    );
    assert!(message.text_body.contains("Trimestre: Trimestre 2"));
    assert!(message.text_body.contains("Fecha Máxima: No especificada"));
    assert!(message.text_body.contains("Actividad: Inventario de activos"));
}

#[tokio::test]
async fn credentials_with_activity_combines_both_sections() {
    let (service, email) = service();
    let result = service
        .send_credentials_with_activity(&CredentialsWithActivityNotice {
            email: "ana@sedapal.com.pe".to_owned(),
            given_name: "ana".to_owned(),
            family_name: "lopez".to_owned(),
            password: "UserAL42".to_owned(),
            activity: ActivityDetails {
                activity_name: "Inventario".to_owned(),
                system_abbreviation: "SIGA".to_owned(),
                team_name: "Equipo TI".to_owned(),
                quarter: 3,
                due_date: Some("2025-09-30".to_owned()),
            },
        })
        .await;
    assert!(result.is_ok());

    let message = only_message(&email);
    assert_eq!(
        message.subject,
        "🔐 Credenciales de Acceso y Nueva Actividad - Sistema SEDAPAL"
    );
    assert!(message.text_body.contains("Contraseña: UserAL42"));
    assert!(message.text_body.contains("Fecha Máxima: 2025-09-30"));
    assert!(message.text_body.contains("Trimestre: Trimestre 3"));
}

#[tokio::test]
async fn deliverable_flagged_goes_to_admin() {
    let (service, email) = service();
    let result = service
        .send_deliverable_flagged(&DeliverableFlaggedNotice {
            admin_email: Some("admin@sedapal.com.pe".to_owned()),
            user_name: Some("Ana Lopez".to_owned()),
            user_email: Some("ana@sedapal.com.pe".to_owned()),
            activity_name: Some("Inventario".to_owned()),
            deliverable_name: None,
            system_abbreviation: None,
            team_name: Some("Equipo TI".to_owned()),
            due_date: None,
        })
        .await;
    assert!(result.is_ok());

    let message = only_message(&email);
    assert_eq!(message.to, vec!["admin@sedapal.com.pe".to_owned()]);
    assert_eq!(message.subject, "🕓 Revisión requerida: Inventario");
    assert!(message.text_body.contains("Entregable: No especificado"));
    assert!(message.text_body.contains("Sistema: N/A"));
    assert!(message.text_body.contains("Fecha máxima: No especificada"));
}

#[tokio::test]
async fn deliverable_approved_concatenates_recipient_lists() {
    let (service, email) = service();
    let result = service
        .send_deliverable_approved(&DeliverableApprovedNotice {
            user_recipients: vec!["a@sedapal.com.pe".to_owned(), "b@sedapal.com.pe".to_owned()],
            superadmin_recipients: vec!["a@sedapal.com.pe".to_owned(), "root@sedapal.com.pe".to_owned()],
            activity_name: Some("Inventario".to_owned()),
            ..DeliverableApprovedNotice::default()
        })
        .await;
    assert!(result.is_ok());

    let message = only_message(&email);
    assert_eq!(
        message.to,
        vec![
            "a@sedapal.com.pe".to_owned(),
            "b@sedapal.com.pe".to_owned(),
            "a@sedapal.com.pe".to_owned(),
            "root@sedapal.com.pe".to_owned(),
        ]
    );
    assert_eq!(message.subject, "✅ Actividad validada: Inventario");
}

#[tokio::test]
async fn deliverable_approved_without_recipients_fails() {
    let (service, email) = service();
    let result = service
        .send_deliverable_approved(&DeliverableApprovedNotice::default())
        .await;

    assert!(matches!(result, Err(AppError::Delivery(_))));
    assert!(email.sent().is_empty());
}

#[tokio::test]
async fn user_created_lists_membership() {
    let (service, email) = service();
    let result = service
        .send_user_created(&UserCreatedNotice {
            email: Some("ana@sedapal.com.pe".to_owned()),
            user_name: Some("Ana Lopez".to_owned()),
            password: Some("UserAL42".to_owned()),
            division_name: Some("Gerencia de Sistemas".to_owned()),
            team_name: Some("Equipo TI".to_owned()),
        })
        .await;
    assert!(result.is_ok());

    let message = only_message(&email);
    assert_eq!(message.subject, "👤 Usuario creado - Accesos y pertenencia");
    assert!(message.text_body.contains("Gerencia: Gerencia de Sistemas"));
    assert!(message.text_body.contains("Equipo: Equipo TI"));
}

#[tokio::test]
async fn test_email_is_plain_text() {
    let (service, email) = service();
    let result = service.send_test_email(Some("ops@sedapal.com.pe")).await;
    assert!(result.is_ok());

    let message = only_message(&email);
    assert_eq!(message.subject, TEST_EMAIL_SUBJECT);
    assert_eq!(message.text_body, TEST_EMAIL_BODY);
    assert!(message.html_body.is_none());
}

#[tokio::test]
async fn missing_recipient_is_a_delivery_error() {
    let (service, _email) = service();
    let result = service.send_test_email(Some("   ")).await;
    assert!(matches!(result, Err(AppError::Delivery(_))));
}

#[tokio::test]
async fn transport_failures_become_delivery_errors() {
    let service = NotificationService::new(Arc::new(FailingEmailService), settings());
    let result = service.send_test_email(Some("ops@sedapal.com.pe")).await;

    match result {
        Err(AppError::Delivery(message)) => assert_eq!(message, "connection refused"),
        other => panic!("expected delivery error, got {other:?}"),
    }
}
