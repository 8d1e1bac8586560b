use sedapal_application::{
    ActivityDetails, CreateAdminInput, CreateUserInput, CreateUserWithActivityInput, CreatedUser,
    UserRecord,
};
use sedapal_core::{AppError, AppResult};
use sedapal_domain::{EmailAddress, SystemId};

use super::{
    CreateAdminRequest, CreateUserRequest, CreateUserWithActivityRequest, UserResponse,
    ValidateCredentialsRequest,
};

impl CreateAdminRequest {
    /// Checks required fields and builds the service input.
    pub fn into_input(self) -> AppResult<CreateAdminInput> {
        required(&self.nombre, "El nombre es requerido")?;
        required(&self.apellido, "El apellido es requerido")?;
        email_field(&self.email)?;
        required(&self.contrasena, "La contraseña es requerida")?;

        Ok(CreateAdminInput {
            given_name: self.nombre,
            family_name: self.apellido,
            email: self.email,
            password: self.contrasena,
            system_id: SystemId::new(self.id_sistema),
        })
    }
}

impl CreateUserRequest {
    pub fn into_input(self) -> AppResult<CreateUserInput> {
        required(&self.nombre, "El nombre es requerido")?;
        required(&self.apellido, "El apellido es requerido")?;
        email_field(&self.email)?;

        Ok(CreateUserInput {
            given_name: self.nombre,
            family_name: self.apellido,
            email: self.email,
        })
    }
}

impl CreateUserWithActivityRequest {
    pub fn into_input(self) -> AppResult<CreateUserWithActivityInput> {
        required(&self.nombre_actividad, "El nombre de la actividad es requerido")?;
        required(
            &self.sistema_abrev,
            "La abreviatura del sistema es requerida",
        )?;
        required(&self.equipo_nombre, "El nombre del equipo es requerido")?;

        let user = CreateUserRequest {
            nombre: self.nombre,
            apellido: self.apellido,
            email: self.email,
        }
        .into_input()?;

        Ok(CreateUserWithActivityInput {
            user,
            activity: ActivityDetails {
                activity_name: self.nombre_actividad,
                system_abbreviation: self.sistema_abrev,
                team_name: self.equipo_nombre,
                quarter: self.trimestre,
                due_date: self.fecha_maxima,
            },
        })
    }
}

impl ValidateCredentialsRequest {
    /// Rejects blank or malformed input before any lookup.
    pub fn validate(&self) -> AppResult<()> {
        email_field(&self.email)?;
        required(&self.contrasena, "La contraseña es requerida")
    }
}

impl From<UserRecord> for UserResponse {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id.value(),
            nombre: value.given_name,
            apellido: value.family_name,
            email: value.email,
            rol: value.role.as_str().to_owned(),
            contrasena: None,
            estado: value.active,
        }
    }
}

impl From<CreatedUser> for UserResponse {
    fn from(value: CreatedUser) -> Self {
        Self {
            contrasena: value.generated_password,
            ..Self::from(value.user)
        }
    }
}

fn required(value: &str, message: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_owned()));
    }

    Ok(())
}

fn email_field(value: &str) -> AppResult<()> {
    required(value, "El email es requerido")?;
    EmailAddress::new(value)
        .map(|_| ())
        .map_err(|_| AppError::Validation("Email inválido".to_owned()))
}
