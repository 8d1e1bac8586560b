//! Message templates. Placeholders use `{{name}}` and are filled in one pass.

use super::NotificationSettings;

/// Header colour scheme for the HTML layout.
#[derive(Debug, Clone, Copy)]
pub(super) enum Accent {
    Blue,
    Green,
}

impl Accent {
    fn gradient(self) -> &'static str {
        match self {
            Self::Blue => "linear-gradient(135deg, #0284c7 0%, #0369a1 100%)",
            Self::Green => "linear-gradient(135deg, #10b981 0%, #059669 100%)",
        }
    }
}

/// Replaces each `{{key}}` with its value. Unknown keys are left as written.
///
/// Inserted values are never rescanned, so a value containing `{{` is safe.
pub(super) fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &after_open[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => {
                output.push_str("{{");
                output.push_str(key);
                output.push_str("}}");
            }
        }

        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}

/// Escapes text for inclusion in HTML element content or quoted attributes.
pub(super) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wraps rendered content in the shared document with header and footer.
pub(super) fn html_document(
    settings: &NotificationSettings,
    accent: Accent,
    title: &str,
    tagline: &str,
    content: &str,
    year: i32,
) -> String {
    let logo = settings
        .logo_url
        .as_deref()
        .map(|url| render(LOGO_HTML, &[("logo_url", &escape_html(url))]))
        .unwrap_or_default();
    let year = year.to_string();

    render(
        LAYOUT_HTML,
        &[
            ("gradient", accent.gradient()),
            ("title", &escape_html(title)),
            ("tagline", &escape_html(tagline)),
            ("content", content),
            ("year", &year),
            ("logo", &logo),
        ],
    )
}

/// Appends the shared plain-text footer.
pub(super) fn text_document(body: &str, year: i32) -> String {
    let year = year.to_string();
    render(LAYOUT_TEXT, &[("body", body), ("year", &year)])
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
        .container { max-width: 600px; margin: 0 auto; padding: 20px; }
        .header { color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }
        .content { background: #ffffff; padding: 30px; border: 1px solid #e5e7eb; }
        .box { background: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0; border-left: 4px solid #0284c7; }
        .box p { margin: 10px 0; }
        .box strong { color: #0284c7; }
        .item-title { font-weight: 600; color: #0369a1; font-size: 16px; margin-bottom: 8px; }
        .row { display: flex; justify-content: space-between; border-bottom: 1px solid #e5e7eb; padding: 8px 0; }
        .row:last-child { border-bottom: none; }
        .label { color: #6b7280; }
        .value { font-weight: 600; color: #111827; }
        .btn { display: inline-block; background: #0284c7; color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; margin: 20px 0; font-weight: bold; }
        .warning { background: #fef2f2; border-left: 4px solid #dc2626; padding: 15px; margin: 20px 0; border-radius: 4px; }
        .warning p { color: #991b1b; margin: 5px 0; }
        .info { background: #fff7ed; border-left: 4px solid #f59e0b; padding: 12px; border-radius: 4px; color: #92400e; font-size: 13px; }
        .note { margin-top: 30px; color: #6b7280; font-size: 14px; }
        .footer { background: #f9fafb; padding: 20px; text-align: center; color: #6b7280; font-size: 12px; border-radius: 0 0 10px 10px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header" style="background: {{gradient}};">
            <h1>{{title}}</h1>
            <p>{{tagline}}</p>
        </div>
        <div class="content">
{{content}}
        </div>
        <div class="footer">
            <p>Este es un correo automático, por favor no responder.</p>
            <p>© {{year}} SEDAPAL - Sistema de Gestión Institucional</p>
{{logo}}
        </div>
    </div>
</body>
</html>
"#;

const LOGO_HTML: &str = r#"            <div style="text-align:center;margin-top:24px;">
                <img src="{{logo_url}}" alt="SEDAPAL" style="height:50px;opacity:0.95;display:inline-block"/>
            </div>"#;

const LAYOUT_TEXT: &str = "{{body}}

--
Este es un correo automático, por favor no responder.
© {{year}} SEDAPAL - Sistema de Gestión Institucional
";

pub(super) const SYSTEM_TAGLINE: &str = "Sistema de Gestión SEDAPAL";

pub(super) const CREDENTIALS_HTML: &str = r#"            <p>Hola <strong>{{full_name}}</strong>,</p>
            <p>Se te ha asignado acceso al Sistema de Gestión SEDAPAL con las siguientes credenciales:</p>
            <div class="box">
                <p><strong>📧 Email:</strong> {{email}}</p>
                <p><strong>🔑 Contraseña:</strong> {{password}}</p>
                <p><strong>👤 Rol:</strong> {{role}}</p>
            </div>
            <a class="btn" href="{{login_url}}">Iniciar sesión</a>
            <div class="warning">
                <p><strong>⚠️ IMPORTANTE:</strong></p>
                <p>• Esta contraseña es temporal y debe ser guardada en un lugar seguro</p>
                <p>• No compartas tus credenciales con nadie</p>
                <p>• Se recomienda cambiar la contraseña al primer inicio de sesión</p>
            </div>
            <p class="note">Si no solicitaste este acceso, contacta inmediatamente al administrador del sistema.</p>"#;

pub(super) const CREDENTIALS_TEXT: &str = "Hola {{full_name}},

Se te ha asignado acceso al Sistema de Gestión SEDAPAL con las siguientes credenciales:

Email: {{email}}
Contraseña: {{password}}
Rol: {{role}}

Inicia sesión en: {{login_url}}

IMPORTANTE:
- Esta contraseña es temporal y debe ser guardada en un lugar seguro
- No compartas tus credenciales con nadie
- Se recomienda cambiar la contraseña al primer inicio de sesión

Si no solicitaste este acceso, contacta inmediatamente al administrador del sistema.";

pub(super) const ACTIVITY_DETAILS_HTML: &str = r#"            <div class="box">
                <div class="item-title">📌 {{activity_name}}</div>
                <div class="row"><span class="label">📊 Sistema:</span><span class="value">{{system}}</span></div>
                <div class="row"><span class="label">👥 Equipo Responsable:</span><span class="value">{{team}}</span></div>
                <div class="row"><span class="label">📅 Trimestre:</span><span class="value">Trimestre {{quarter}}</span></div>
                <div class="row"><span class="label">⏰ Fecha Máxima:</span><span class="value">{{due_date}}</span></div>
            </div>"#;

pub(super) const ACTIVITY_DETAILS_TEXT: &str = "Actividad: {{activity_name}}
Sistema: {{system}}
Equipo Responsable: {{team}}
Trimestre: Trimestre {{quarter}}
Fecha Máxima: {{due_date}}";

pub(super) const ACTIVITY_HTML: &str = r#"            <p>Hola <strong>{{user_name}}</strong>,</p>
            <p>Se te ha asignado una nueva actividad en el Sistema de Gestión SEDAPAL:</p>
{{details}}
            <div class="info">
                <p><strong>💡 Qué hacer ahora:</strong></p>
                <p>• Inicia sesión en el sistema</p>
                <p>• Revisa los detalles de la actividad</p>
                <p>• Sube los entregables antes de la fecha máxima</p>
            </div>
            <a class="btn" href="{{login_url}}">Ir al sistema</a>
            <p class="note">Si tienes alguna duda sobre esta actividad, contacta a tu administrador.</p>"#;

pub(super) const ACTIVITY_TEXT: &str = "Hola {{user_name}},

Se te ha asignado una nueva actividad en el Sistema de Gestión SEDAPAL:

{{details}}

Inicia sesión en {{login_url}}, revisa los detalles de la actividad y sube los entregables antes de la fecha máxima.

Si tienes alguna duda sobre esta actividad, contacta a tu administrador.";

pub(super) const CREDENTIALS_WITH_ACTIVITY_HTML: &str = r#"            <p>Hola <strong>{{full_name}}</strong>,</p>
            <p>Se te ha creado una cuenta en el Sistema de Gestión SEDAPAL y se te ha asignado una nueva actividad.</p>
            <div class="box">
                <p><strong>🔐 TUS CREDENCIALES DE ACCESO:</strong></p>
                <p><strong>📧 Email:</strong> {{email}}</p>
                <p><strong>🔑 Contraseña:</strong> {{password}}</p>
                <p><strong>👤 Rol:</strong> Usuario</p>
            </div>
            <p><strong>📝 ACTIVIDAD ASIGNADA:</strong></p>
{{details}}
            <a class="btn" href="{{login_url}}">Iniciar sesión</a>
            <div class="warning">
                <p><strong>⚠️ IMPORTANTE:</strong></p>
                <p>• Guarda tus credenciales en un lugar seguro</p>
                <p>• No compartas tu contraseña con nadie</p>
                <p>• Se recomienda cambiar la contraseña al primer inicio de sesión</p>
                <p>• Recuerda subir los entregables antes de la fecha máxima</p>
            </div>
            <p class="note">Si no solicitaste este acceso, contacta inmediatamente al administrador del sistema.</p>"#;

pub(super) const CREDENTIALS_WITH_ACTIVITY_TEXT: &str = "Hola {{full_name}},

Se te ha creado una cuenta en el Sistema de Gestión SEDAPAL y se te ha asignado una nueva actividad.

TUS CREDENCIALES DE ACCESO
Email: {{email}}
Contraseña: {{password}}
Rol: Usuario

ACTIVIDAD ASIGNADA
{{details}}

Inicia sesión en: {{login_url}}

IMPORTANTE:
- Guarda tus credenciales en un lugar seguro
- No compartas tu contraseña con nadie
- Se recomienda cambiar la contraseña al primer inicio de sesión
- Recuerda subir los entregables antes de la fecha máxima";

pub(super) const DELIVERABLE_DETAILS_HTML: &str = r#"            <div class="box">
                <div class="item-title">📌 {{activity_name}}</div>
                <div class="row"><span class="label">📑 Entregable:</span><span class="value">{{deliverable}}</span></div>
                <div class="row"><span class="label">📊 Sistema:</span><span class="value">{{system}}</span></div>
                <div class="row"><span class="label">👥 Equipo:</span><span class="value">{{team}}</span></div>
                <div class="row"><span class="label">⏰ Fecha máxima:</span><span class="value">{{due_date}}</span></div>
            </div>"#;

pub(super) const DELIVERABLE_DETAILS_TEXT: &str = "Actividad: {{activity_name}}
Entregable: {{deliverable}}
Sistema: {{system}}
Equipo: {{team}}
Fecha máxima: {{due_date}}";

pub(super) const DELIVERABLE_FLAGGED_HTML: &str = r#"            <p>El usuario <strong>{{user_name}}</strong> (<a href="mailto:{{user_email}}">{{user_email}}</a>) marcó su actividad como <strong>Cumplió</strong>.</p>
{{details}}
            <div class="info">Revisa el entregable y si corresponde, marca <strong>Conforme</strong>.</div>
            <a class="btn" href="{{login_url}}">Revisar entregable</a>"#;

pub(super) const DELIVERABLE_FLAGGED_TEXT: &str = "El usuario {{user_name}} ({{user_email}}) marcó su actividad como Cumplió.

{{details}}

Revisa el entregable en {{login_url}} y si corresponde, marca Conforme.";

pub(super) const DELIVERABLE_APPROVED_HTML: &str = r#"            <p>La actividad fue revisada y <strong>validada (Conforme)</strong>. El estado pasó a <strong>Completado</strong>.</p>
{{details}}
            <a class="btn" href="{{login_url}}">Ver actividad</a>"#;

pub(super) const DELIVERABLE_APPROVED_TEXT: &str = "La actividad fue revisada y validada (Conforme). El estado pasó a Completado.

{{details}}

Consulta el detalle en: {{login_url}}";

pub(super) const USER_CREATED_HTML: &str = r#"            <p>Hola <strong>{{user_name}}</strong>,</p>
            <p>Tu cuenta ha sido creada. Estos son tus accesos y tu pertenencia organizacional:</p>
            <div class="box">
                <div class="row"><span class="label">📧 Email</span><span class="value">{{email}}</span></div>
                <div class="row"><span class="label">🔑 Contraseña</span><span class="value">{{password}}</span></div>
                <div class="row"><span class="label">👤 Rol</span><span class="value">Usuario</span></div>
            </div>
            <div class="box">
                <div class="row"><span class="label">🏢 Gerencia</span><span class="value">{{division}}</span></div>
                <div class="row"><span class="label">👥 Equipo</span><span class="value">{{team}}</span></div>
            </div>
            <a class="btn" href="{{login_url}}">Iniciar sesión</a>"#;

pub(super) const USER_CREATED_TEXT: &str = "Hola {{user_name}},

Tu cuenta ha sido creada. Estos son tus accesos y tu pertenencia organizacional:

Email: {{email}}
Contraseña: {{password}}
Rol: Usuario
Gerencia: {{division}}
Equipo: {{team}}

Inicia sesión en: {{login_url}}";

pub(super) const SYSTEM_ASSIGNED_HTML: &str = r#"            <p>Hola <strong>{{admin_name}}</strong>,</p>
            <p>Se te ha asignado el siguiente sistema:</p>
            <div class="box">
                <div class="row"><span class="label">Sigla</span><span class="value">{{system_abbreviation}}</span></div>
                <div class="row"><span class="label">Nombre</span><span class="value">{{system_name}}</span></div>
            </div>
            <a class="btn" href="{{login_url}}">Ir al sistema</a>"#;

pub(super) const SYSTEM_ASSIGNED_TEXT: &str = "Hola {{admin_name}},

Se te ha asignado el siguiente sistema:

Sigla: {{system_abbreviation}}
Nombre: {{system_name}}

Inicia sesión en: {{login_url}}";
