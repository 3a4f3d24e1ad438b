use anyhow::Result;

use crate::api::AppState;
use crate::models::{MoviePayload, UserPayload};

/// Inserts demo rows into empty tables. Tables that already hold rows are
/// left untouched, so seeding is safe to run on every start.
pub struct DatabaseSeeder {
    state: AppState,
}

impl DatabaseSeeder {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        self.seed_users().await?;
        self.seed_movies().await?;

        tracing::info!("Database seeding completed!");
        Ok(())
    }

    async fn seed_users(&self) -> Result<()> {
        if !self.state.users.list_users().await?.is_empty() {
            tracing::debug!("Users table already populated, skipping");
            return Ok(());
        }

        let demo_users = [
            ("John", "Doe", "john.doe@example.com", "Paris", "English"),
            ("Valeriy", "Appius", "valeriy.appius@example.com", "Moscow", "Russian"),
            ("Ralf", "Geronimo", "ralf.geronimo@example.com", "New York", "Italian"),
            ("Maria", "Iskandar", "maria.iskandar@example.com", "New York", "German"),
            ("Jane", "Doe", "jane.doe@example.com", "London", "English"),
        ];

        for (firstname, lastname, email, city, language) in demo_users {
            let user = self
                .state
                .users
                .create_user(UserPayload {
                    firstname: Some(firstname.to_string()),
                    lastname: Some(lastname.to_string()),
                    email: Some(email.to_string()),
                    city: Some(city.to_string()),
                    language: Some(language.to_string()),
                })
                .await?;
            tracing::info!(user_id = user.id, "Created demo user");
        }

        Ok(())
    }

    async fn seed_movies(&self) -> Result<()> {
        if !self.state.movies.list_movies().await?.is_empty() {
            tracing::debug!("Movies table already populated, skipping");
            return Ok(());
        }

        let demo_movies = [
            ("Citizen Kane", "Orson Welles", "1941", false, 120.0),
            ("The Godfather", "Francis Ford Coppola", "1972", true, 180.0),
            ("Pulp Fiction", "Quentin Tarantino", "1994", true, 180.0),
            ("Apocalypse Now", "Francis Ford Coppola", "1979", true, 150.0),
            ("2001 a space odyssey", "Stanley Kubrick", "1968", true, 160.0),
            ("The Dark Knight", "Christopher Nolan", "2008", true, 150.0),
        ];

        for (title, director, year, color, duration) in demo_movies {
            let movie = self
                .state
                .movies
                .create_movie(MoviePayload {
                    title: title.to_string(),
                    director: director.to_string(),
                    year: year.to_string(),
                    color,
                    duration,
                })
                .await?;
            tracing::info!(movie_id = movie.id, "Created demo movie");
        }

        Ok(())
    }
}
