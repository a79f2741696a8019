//! HTTP tests against a mocked Sleeper API

use super::*;
use crate::{
    cli::types::{MatchupId, PlayerId, RosterId, UserId},
    sleeper::stats::WeekStatsSource,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const LEAGUE: u64 = 784516360429940736;

fn client_for(server: &MockServer) -> SleeperClient {
    SleeperClient::with_base_urls(&server.uri(), &server.uri()).unwrap()
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_base_url_constants() {
        assert_eq!(SLEEPER_BASE_URL, "https://api.sleeper.app/v1");
        assert_eq!(SLEEPER_RESEARCH_URL, "https://api.sleeper.com");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = SleeperClient::with_base_urls("http://localhost:1234/", "x").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_get_league_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/league/{}", LEAGUE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league_id": LEAGUE.to_string(),
                "name": "Sunday Scaries",
                "season": "2024",
                "total_rosters": 12
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let league = client.get_league(LeagueId::new(LEAGUE)).await.unwrap();
        assert_eq!(league["name"], "Sunday Scaries");
        assert_eq!(league["total_rosters"], 12);
    }

    #[tokio::test]
    async fn test_typed_rosters_users_and_matchups() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/league/{}/rosters", LEAGUE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "roster_id": 1,
                    "owner_id": "100",
                    "starters": ["4034"],
                    "settings": { "wins": 3, "losses": 1, "fpts": 480 }
                },
                {
                    "roster_id": 2,
                    "owner_id": null,
                    "starters": [],
                    "settings": { "wins": 1, "losses": 3, "fpts": 401 }
                }
            ])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/league/{}/users", LEAGUE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "user_id": "100", "display_name": "alice", "metadata": { "team_name": "Aces" } }
            ])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/league/{}/matchups/4", LEAGUE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "matchup_id": 1, "roster_id": 1, "points": 101.5 },
                { "matchup_id": 1, "roster_id": 2, "points": 99.25 }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let league_id = LeagueId::new(LEAGUE);

        let rosters = client.rosters(league_id).await.unwrap();
        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].owner_id, Some(UserId::new("100")));
        assert!(rosters[1].owner_id.is_none());

        let users = client.users(league_id).await.unwrap();
        assert_eq!(users[0].team_name(), "Aces");

        let matchups = client.matchups(league_id, Week::new(4)).await.unwrap();
        assert_eq!(matchups.len(), 2);
        assert_eq!(matchups[1].matchup_id, Some(MatchupId::new(1)));
        assert_eq!(matchups[1].roster_id, RosterId::new(2));
        assert_eq!(matchups[1].points, Some(99.25));
    }

    #[tokio::test]
    async fn test_playoff_week_matchups_with_unscheduled_rosters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/league/{}/matchups/15", LEAGUE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "matchup_id": 1, "roster_id": 1, "points": 120.5 },
                { "matchup_id": 1, "roster_id": 2, "points": 118.0 },
                { "matchup_id": null, "roster_id": 3, "points": 0.0 }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let matchups = client
            .matchups(LeagueId::new(LEAGUE), Week::new(15))
            .await
            .unwrap();

        assert_eq!(matchups.len(), 3);
        assert_eq!(matchups[0].matchup_id, Some(MatchupId::new(1)));
        assert_eq!(matchups[2].matchup_id, None);
        assert_eq!(matchups[2].roster_id, RosterId::new(3));
    }

    #[tokio::test]
    async fn test_null_payload_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/1/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.users(LeagueId::new(1)).await;
        assert!(matches!(result, Err(SleeperError::NoData)));
    }

    #[tokio::test]
    async fn test_http_error_status_is_surfaced() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.get_traded_picks(LeagueId::new(1)).await;
        match result {
            Err(SleeperError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert!(client.get_all_drafts(LeagueId::new(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_league_collection_paths() {
        let mock_server = MockServer::start().await;

        for p in [
            "winners_bracket",
            "losers_bracket",
            "transactions/3",
            "traded_picks",
            "drafts",
        ] {
            Mock::given(method("GET"))
                .and(path(format!("/league/{}/{}", LEAGUE, p)))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "path": p }])))
                .mount(&mock_server)
                .await;
        }

        let client = client_for(&mock_server);
        let id = LeagueId::new(LEAGUE);

        let winners = client.get_playoff_winners_bracket(id).await.unwrap();
        assert_eq!(winners[0]["path"], "winners_bracket");
        let losers = client.get_playoff_losers_bracket(id).await.unwrap();
        assert_eq!(losers[0]["path"], "losers_bracket");
        let tx = client.get_transactions(id, Week::new(3)).await.unwrap();
        assert_eq!(tx[0]["path"], "transactions/3");
        let picks = client.get_traded_picks(id).await.unwrap();
        assert_eq!(picks[0]["path"], "traded_picks");
        let drafts = client.get_all_drafts(id).await.unwrap();
        assert_eq!(drafts[0]["path"], "drafts");
    }

    #[tokio::test]
    async fn test_trending_players_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players/nfl/trending/add"))
            .and(query_param("lookback_hours", "24"))
            .and(query_param("limit", "25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "player_id": "4034", "count": 1520 }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let trending = client
            .get_trending_players(Sport::Nfl, TrendType::Add, 24, 25)
            .await
            .unwrap();
        assert_eq!(trending[0]["player_id"], "4034");
    }

    #[tokio::test]
    async fn test_players_ownership_with_and_without_week() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players/nfl/research/regular/2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "scope": "season" })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/players/nfl/research/regular/2024/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "scope": "week" })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let season = client
            .get_players_ownership(SeasonType::Regular, Season::new(2024), None)
            .await
            .unwrap();
        assert_eq!(season["scope"], "season");

        let week = client
            .get_players_ownership(SeasonType::Regular, Season::new(2024), Some(Week::new(5)))
            .await
            .unwrap();
        assert_eq!(week["scope"], "week");
    }

    #[tokio::test]
    async fn test_week_stats_source() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stats/nfl/regular/2019/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "4034": { "pts_ppr": 31.2, "pts_std": 22.2 },
                "NE": { "pts_std": 14.0 }
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let stats = client
            .get_week_stats(SeasonType::Regular, Season::new(2019), Week::new(1))
            .await
            .unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[&PlayerId::new("4034")].get("pts_ppr"), Some(31.2));
        assert_eq!(stats[&PlayerId::new("NE")].get("pts_ppr"), None);
    }
}

#[cfg(test)]
mod player_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_all_players() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "4034": { "player_id": "4034", "full_name": "Christian McCaffrey", "position": "RB" },
                "NE": { "player_id": "NE", "position": "DEF" }
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let players = client.get_all_players().await.unwrap();
        assert_eq!(players["4034"]["position"], "RB");
        assert_eq!(players["NE"]["position"], "DEF");
    }
}
