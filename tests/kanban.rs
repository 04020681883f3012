#[cfg(test)]
mod tests {
    use kanban_board_server::kanban::handlers::debug_handler::DebugHandler;
    use kanban_board_server::kanban::repository::KanbanRepository;
    use kanban_board_server::kanban::types::board::{Board, BoardUpdate, NewBoard};
    use kanban_board_server::kanban::types::card::{CardContent, CardUpdate, NewCard, Position};
    use kanban_board_server::kanban::util::progress::Direction;
    use kanban_board_server::shared::types::account::Account;
    use kanban_board_server::shared::types::error::KanbanError;
    use std::sync::Arc;
    use uuid::Uuid;

    fn admin() -> Account {
        Account {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "admin@x.com".to_string(),
            password_hash: String::new()
        }
    }

    fn repository() -> KanbanRepository {
        KanbanRepository::new(Arc::new(DebugHandler::new()))
    }

    async fn sprint(repo: &KanbanRepository, owner: &Account) -> Board {
        repo.create_board(owner, &NewBoard { name: "Sprint1".to_string(), info: "info".to_string() })
            .await.unwrap()
    }

    fn new_card(board: &Board, variant: &str, title: &str, payload: Option<&str>) -> NewCard {
        NewCard {
            board_id: board.id,
            variant: variant.to_string(),
            title: title.to_string(),
            payload: payload.map(str::to_string)
        }
    }

    #[actix_web::test]
    async fn boards() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;
        assert_eq!(board.progress, 0, "new boards start with no progress");
        assert_eq!(board.owner_id, owner.id);

        let fetched = repo.get_board(&owner, &board.id).await.unwrap();
        assert_eq!(fetched, board, "Board successfully found after insert");

        let updated = repo.update_board(&owner, &board.id, &BoardUpdate {
            name: "Updated Name".to_string(),
            info: "".to_string(),
            progress: 60
        }).await.unwrap();
        assert_eq!(updated.name, "Updated Name");
        assert_eq!(updated.info, "", "info may be cleared on edit");
        assert_eq!(updated.progress, 60);
        assert_eq!(updated.owner_id, owner.id, "Owner not changed");

        assert!(matches!(repo.get_board(&owner, &Uuid::new_v4()).await, Err(KanbanError::NotFound(_))));
        assert_eq!(repo.list_boards(&owner).await.unwrap().len(), 1);
        assert!(repo.list_boards(&admin()).await.unwrap().is_empty(), "other accounts own nothing");
    }

    #[actix_web::test]
    async fn board_progress_out_of_range_is_rejected() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;

        for progress in [150, 101, -1] {
            let result = repo.update_board(&owner, &board.id, &BoardUpdate {
                name: "Sprint1".to_string(),
                info: "info".to_string(),
                progress
            }).await;
            assert!(matches!(result, Err(KanbanError::Validation(_))), "progress {progress} rejected, not clamped");
        }
        assert_eq!(repo.get_board(&owner, &board.id).await.unwrap().progress, 0, "board untouched");
    }

    #[actix_web::test]
    async fn board_progress_steps() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;

        let board = repo.step_board_progress(&owner, &board.id, Direction::Decrease).await.unwrap();
        assert_eq!(board.progress, 0);
        let board = repo.step_board_progress(&owner, &board.id, Direction::from_signal(10)).await.unwrap();
        assert_eq!(board.progress, 10);
        assert_eq!(repo.get_board(&owner, &board.id).await.unwrap().progress, 10, "step is persisted");
    }

    #[actix_web::test]
    async fn new_cards_start_in_backlog() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;

        let plain = repo.create_card(&owner, &new_card(&board, "plain", "P", Some("ignored"))).await.unwrap();
        let text = repo.create_card(&owner, &new_card(&board, "text", "T", Some("body"))).await.unwrap();
        let image = repo.create_card(&owner, &new_card(&board, "image", "I", Some("https://x.io/a.png"))).await.unwrap();

        for card in [&plain, &text, &image] {
            assert_eq!(card.position, Position::Backlog);
            assert_eq!(card.progress, 0);
            assert_eq!(card.board_id, board.id);
        }
        assert_eq!(plain.content, CardContent::Plain);
        assert_eq!(text.content, CardContent::Text { text: "body".to_string() });
        assert_eq!(image.content, CardContent::Image { url: "https://x.io/a.png".to_string() });
    }

    #[actix_web::test]
    async fn card_creation_validates_input() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;

        assert!(matches!(repo.create_card(&owner, &new_card(&board, "list", "L", None)).await,
            Err(KanbanError::UnknownVariant(_))));
        assert!(matches!(repo.create_card(&owner, &new_card(&board, "text", "T", None)).await,
            Err(KanbanError::Validation(_))), "text card needs text");
        assert!(matches!(repo.create_card(&owner, &new_card(&board, "image", "I", Some("not a url"))).await,
            Err(KanbanError::Validation(_))), "image card needs a url");
        assert!(matches!(repo.create_card(&owner, &new_card(&board, "plain", " ", None)).await,
            Err(KanbanError::Validation(_))), "title required");

        let mut orphan = new_card(&board, "plain", "P", None);
        orphan.board_id = Uuid::new_v4();
        assert!(matches!(repo.create_card(&owner, &orphan).await, Err(KanbanError::NotFound(_))),
            "board must exist");
        assert!(repo.view_board(&owner, &board.id).await.unwrap().cards.is_empty());
    }

    #[actix_web::test]
    async fn update_then_get_round_trips() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;
        let card = repo.create_card(&owner, &new_card(&board, "image", "I", Some("https://x.io/a.png"))).await.unwrap();

        let update = CardUpdate {
            title: "New title".to_string(),
            payload: Some("https://x.io/b.png".to_string()),
            position: 2,
            progress: 70
        };
        let written = repo.update_card(&owner, &card.id, "image", &update).await.unwrap();
        let fetched = repo.get_card(&owner, &card.id, "image").await.unwrap();

        assert_eq!(fetched, written);
        assert_eq!(fetched.title, "New title");
        assert_eq!(fetched.content, CardContent::Image { url: "https://x.io/b.png".to_string() });
        assert_eq!(fetched.position, Position::InReview);
        assert_eq!(fetched.progress, 70);
        assert_eq!(fetched.board_id, board.id, "parent board never changes");
    }

    #[actix_web::test]
    async fn update_without_payload_keeps_it() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;
        let card = repo.create_card(&owner, &new_card(&board, "text", "T", Some("body"))).await.unwrap();

        let update = CardUpdate { title: "T2".to_string(), payload: None, position: 1, progress: 5 };
        let card = repo.update_card(&owner, &card.id, "text", &update).await.unwrap();
        assert_eq!(card.content, CardContent::Text { text: "body".to_string() });
        assert_eq!(card.position, Position::InProgress);
    }

    #[actix_web::test]
    async fn update_rejects_bad_position_and_progress() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;
        let card = repo.create_card(&owner, &new_card(&board, "plain", "P", None)).await.unwrap();

        let bad_position = CardUpdate { title: "P".to_string(), payload: None, position: 4, progress: 0 };
        assert!(matches!(repo.update_card(&owner, &card.id, "plain", &bad_position).await,
            Err(KanbanError::Validation(_))));
        let bad_progress = CardUpdate { title: "P".to_string(), payload: None, position: 0, progress: 101 };
        assert!(matches!(repo.update_card(&owner, &card.id, "plain", &bad_progress).await,
            Err(KanbanError::Validation(_))));
        assert!(matches!(repo.update_card(&owner, &card.id, "cards", &bad_progress).await,
            Err(KanbanError::UnknownVariant(_))));
    }

    #[actix_web::test]
    async fn variant_must_match() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;
        let card = repo.create_card(&owner, &new_card(&board, "text", "T", Some("body"))).await.unwrap();

        assert!(matches!(repo.get_card(&owner, &card.id, "plain").await, Err(KanbanError::NotFound(_))));
        assert!(matches!(repo.get_card(&owner, &card.id, "title_text_cards").await,
            Err(KanbanError::UnknownVariant(_))), "unknown tags are errors, not no-ops");
        assert!(matches!(repo.delete_card(&owner, &card.id, "image").await, Err(KanbanError::NotFound(_))));
        assert!(repo.get_card(&owner, &card.id, "text").await.is_ok(), "wrong variant deletes nothing");
    }

    #[actix_web::test]
    async fn delete_leaves_siblings() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;
        let doomed = repo.create_card(&owner, &new_card(&board, "plain", "A", None)).await.unwrap();
        let sibling = repo.create_card(&owner, &new_card(&board, "plain", "B", None)).await.unwrap();

        repo.delete_card(&owner, &doomed.id, "plain").await.unwrap();
        assert!(matches!(repo.get_card(&owner, &doomed.id, "plain").await, Err(KanbanError::NotFound(_))));
        assert!(matches!(repo.delete_card(&owner, &doomed.id, "plain").await, Err(KanbanError::NotFound(_))),
            "Deleting already deleted card");
        assert_eq!(repo.get_card(&owner, &sibling.id, "plain").await.unwrap(), sibling);

        let view = repo.view_board(&owner, &board.id).await.unwrap();
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].id, sibling.id);
    }

    #[actix_web::test]
    async fn card_progress_steps() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;
        let card = repo.create_card(&owner, &new_card(&board, "text", "T", Some("body"))).await.unwrap();

        for _ in 0..3 {
            repo.step_card_progress(&owner, &card.id, "text", Direction::from_signal(10)).await.unwrap();
        }
        assert_eq!(repo.get_card(&owner, &card.id, "text").await.unwrap().progress, 30);

        let card = repo.step_card_progress(&owner, &card.id, "text", Direction::from_signal(-10)).await.unwrap();
        assert_eq!(card.progress, 20);

        for _ in 0..12 {
            repo.step_card_progress(&owner, &card.id, "text", Direction::Increase).await.unwrap();
        }
        assert_eq!(repo.get_card(&owner, &card.id, "text").await.unwrap().progress, 100, "clamped at 100");
    }

    #[actix_web::test]
    async fn view_orders_cards_by_position() {
        let repo = repository();
        let owner = admin();
        let board = sprint(&repo, &owner).await;
        let done = repo.create_card(&owner, &new_card(&board, "plain", "Done", None)).await.unwrap();
        let todo = repo.create_card(&owner, &new_card(&board, "plain", "Todo", None)).await.unwrap();

        let update = CardUpdate { title: "Done".to_string(), payload: None, position: 3, progress: 100 };
        repo.update_card(&owner, &done.id, "plain", &update).await.unwrap();

        let view = repo.view_board(&owner, &board.id).await.unwrap();
        assert_eq!(view.board.id, board.id);
        let ids: Vec<Uuid> = view.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![todo.id, done.id]);

        assert!(matches!(repo.view_board(&owner, &Uuid::new_v4()).await, Err(KanbanError::NotFound(_))));
    }
}
