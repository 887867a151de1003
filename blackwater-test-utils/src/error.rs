use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    BlackwaterError(#[from] blackwater::error::Error),
    #[error(transparent)]
    BlizzardError(#[from] blizzard::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
