pub mod admin_sistemas;
pub mod health;
pub mod notificaciones;
pub mod usuarios;
