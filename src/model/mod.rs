mod event;
mod match_detail;
mod matches;
mod news;
mod player;
mod ranking;
mod search;
mod stats;
mod team;
mod transfer;

pub use event::*;
pub use match_detail::*;
pub use matches::*;
pub use news::*;
pub use player::*;
pub use ranking::*;
pub use search::*;
pub use stats::*;
pub use team::*;
pub use transfer::*;

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fmt::Debug;

    use serde::de::DeserializeOwned;
    use serde::Serialize;

    use super::*;

    fn assert_round_trip<T: Serialize + DeserializeOwned + PartialEq + Debug>(value: &T) {
        let raw = serde_json::to_string(value).unwrap();
        assert_eq!(&serde_json::from_str::<T>(&raw).unwrap(), value);
    }

    fn side(all: &str, attack: &str, defend: &str) -> SideStat {
        SideStat {
            all: all.into(),
            attack: attack.into(),
            defend: defend.into(),
        }
    }

    #[test]
    fn enums_use_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&EventStatus::Ongoing).unwrap(), r#""ongoing""#);
        assert_eq!(serde_json::to_string(&MatchStatus::Live).unwrap(), r#""live""#);
        assert_eq!(serde_json::to_string(&TeamSlot::Team2).unwrap(), r#""team2""#);
        assert_eq!(serde_json::to_string(&WinCondition::BombDefused).unwrap(), r#""bomb_defused""#);
    }

    #[test]
    fn nested_records_survive_json() {
        let detail = NewsDetail {
            title: "Champions recap".into(),
            author: "Rhyme".into(),
            date: "August 4, 2025".into(),
            content: "What a year.".into(),
            url: "https://www.vlr.gg/412345/recap".into(),
            comments: vec![ThreadComment {
                author: "alpha".into(),
                content: "first".into(),
                url: Some("https://www.vlr.gg/412345/recap/?comment=1".into()),
                children: vec![ThreadComment {
                    author: "beta".into(),
                    content: "reply".into(),
                    url: None,
                    children: vec![],
                }],
            }],
        };
        let raw = serde_json::to_string(&detail).unwrap();
        assert_eq!(serde_json::from_str::<NewsDetail>(&raw).unwrap(), detail);

        let stats = MapStats::default();
        let raw = serde_json::to_string(&stats).unwrap();
        assert_eq!(serde_json::from_str::<MapStats>(&raw).unwrap(), stats);
    }

    #[test]
    fn populated_match_detail_survives_json() {
        let player = PlayerMatchStat {
            player_name: "TenZ".into(),
            team: "SEN".into(),
            agents: vec!["jett".into(), "raze".into()],
            rating: side("1.32", "1.40", "1.21"),
            acs: side("281", "300", "260"),
            kills: side("24", "13", "11"),
            deaths: side("15", "8", "7"),
            assists: side("4", "2", "2"),
            kd_diff: side("+9", "+5", "+4"),
            kast: side("78%", "80%", "75%"),
            adr: side("170", "182", "158"),
            hs: side("31%", "33%", "29%"),
            fk: side("5", "3", "2"),
            fd: side("2", "1", "1"),
            fk_diff: side("+3", "+2", "+1"),
        };
        let rounds = vec![
            Round {
                number: "1".into(),
                score: "1-0".into(),
                winner: TeamSlot::Team1,
                t: Some(TeamSlot::Team1),
                ct: Some(TeamSlot::Team2),
                win_condition: WinCondition::BombExploded,
                win_icon_url: Some("https://www.vlr.gg/img/vlr/game/round/boom.webp".into()),
            },
            Round {
                number: "2".into(),
                score: "1-1".into(),
                winner: TeamSlot::Team2,
                t: None,
                ct: None,
                win_condition: WinCondition::Unknown,
                win_icon_url: None,
            },
        ];
        let ascent = MapStatsData {
            map_name: "Ascent".into(),
            player_stats: vec![player.clone()],
            rounds,
        };
        let detail = MatchDetail {
            event_name: "Champions Tour 2025: Americas Stage 1".into(),
            event_image: Some("https://owcdn.net/img/event.png".into()),
            match_subtitle: "Upper Final".into(),
            date: "Saturday, April 12th".into(),
            time: "3:00 PM PDT".into(),
            patch: Some("Patch 10.06".into()),
            team1: TeamInfo {
                name: "Sentinels".into(),
                logo: Some("https://owcdn.net/img/sen.png".into()),
                link: Some("https://www.vlr.gg/team/2/sentinels".into()),
                score: Some("2".into()),
            },
            team2: TeamInfo {
                name: "G2 Esports".into(),
                logo: None,
                link: None,
                score: Some("1".into()),
            },
            status: MatchStatus::Completed,
            time_until_match: None,
            format: "Bo3".into(),
            bans_picks_info: Some("SEN ban Icebox; G2 ban Lotus".into()),
            streams: vec![StreamInfo {
                name: "Valorant Americas".into(),
                url: "https://www.twitch.tv/valorant_americas".into(),
            }],
            maps: vec![MapResult {
                map_name: "Ascent".into(),
                team1_score: TeamScore {
                    total: "13".into(),
                    attack: Some("7".into()),
                    defend: Some("6".into()),
                },
                team2_score: TeamScore {
                    total: "9".into(),
                    attack: None,
                    defend: None,
                },
                winner: Some(TeamSlot::Team1),
                picked_by: Some(TeamSlot::Team2),
                duration: Some("48:12".into()),
            }],
            map_stats: MapStats {
                all_maps: Some(MapStatsData {
                    map_name: "All Maps".into(),
                    player_stats: vec![player],
                    rounds: vec![],
                }),
                map1: Some(ascent),
                ..MapStats::default()
            },
        };
        assert_round_trip(&detail);
    }

    #[test]
    fn populated_event_detail_survives_json() {
        let detail = EventDetail {
            id: "2283".into(),
            name: "Champions 2025".into(),
            dates: "Sep 12 - Oct 5, 2025".into(),
            prize_pool: Some("$2,250,000".into()),
            teams: vec![EventTeam {
                name: "Fnatic".into(),
                tag: Some("FNC".into()),
                standing: Some("Group A".into()),
                logo_url: Some("https://owcdn.net/img/fnc.png".into()),
                url: "https://www.vlr.gg/team/2593/fnatic".into(),
            }],
            brackets: vec![EventBracketGroup {
                name: "Upper".into(),
                rounds: vec![EventBracketRound {
                    name: "Upper Quarterfinals".into(),
                    matches: vec![
                        EventBracketMatch {
                            team1: EventBracketTeam {
                                name: "Fnatic".into(),
                                score: Some("2".into()),
                                is_winner: true,
                                logo_url: Some("https://owcdn.net/img/fnc.png".into()),
                            },
                            team2: EventBracketTeam {
                                name: "DRX".into(),
                                score: Some("0".into()),
                                is_winner: false,
                                logo_url: None,
                            },
                            status: Some("final".into()),
                            url: Some("https://www.vlr.gg/530001/fnc-vs-drx".into()),
                        },
                        EventBracketMatch {
                            team1: EventBracketTeam::tbd(),
                            team2: EventBracketTeam::tbd(),
                            status: None,
                            url: None,
                        },
                    ],
                }],
            }],
            location: Some("Paris".into()),
            format: Some("Double elimination".into()),
            logo_url: None,
            region: Some("International".into()),
            url: "https://www.vlr.gg/event/2283/champions-2025".into(),
        };
        assert_round_trip(&detail);
    }

    #[test]
    fn populated_team_survives_json() {
        let team = Team {
            id: "2".into(),
            name: "Sentinels".into(),
            tag: Some("SEN".into()),
            logo_url: Some("https://owcdn.net/img/sen.png".into()),
            region: Some("United States".into()),
            social_links: BTreeMap::from([
                ("twitter".to_string(), "https://twitter.com/Sentinels".to_string()),
                ("website".to_string(), "https://sentinels.gg".to_string()),
            ]),
            total_winnings: Some("$1,234,567".into()),
            roster: vec![TeamPlayer {
                alias: "zekken".into(),
                real_name: Some("Zachary Patrone".into()),
                url: "https://www.vlr.gg/player/4004/zekken".into(),
                image_url: None,
                roles: vec!["captain".into()],
            }],
            recent_matches: vec![TeamMatch {
                event_name: "Masters Toronto".into(),
                event_stage: Some("Playoffs".into()),
                opponent: "Fnatic".into(),
                score: Some("2 : 1".into()),
                date: "2025/06/20".into(),
                url: "https://www.vlr.gg/500001/sen-vs-fnc".into(),
                is_upcoming: false,
            }],
            upcoming_matches: vec![TeamMatch {
                event_name: "Champions".into(),
                event_stage: None,
                opponent: "Paper Rex".into(),
                score: Some("53m".into()),
                date: "2025/09/12".into(),
                url: "https://www.vlr.gg/500002/sen-vs-prx".into(),
                is_upcoming: true,
            }],
            event_placements: vec![EventPlacement {
                event_name: "Masters Madrid".into(),
                year: "2024".into(),
                results: vec![PlacementResult {
                    stage: "Playoffs".into(),
                    rank: "1st".into(),
                    prize: Some("$250,000".into()),
                }],
                url: "https://www.vlr.gg/event/1921/masters-madrid".into(),
            }],
            rating_history: vec![RatingHistoryEntry {
                rank: "3".into(),
                region: "North America".into(),
                url: "https://www.vlr.gg/rankings/north-america".into(),
            }],
            form_rating: vec![FormRating {
                date: "2025/06/20".into(),
                opponent: "Fnatic".into(),
                event: "Masters Toronto".into(),
                result: "W".into(),
                current_rating: Some(1732),
                opponent_rating: None,
                core_id: "a1".into(),
            }],
            ranking_history: vec![RankingHistoryEntry {
                date: "2025/06/01".into(),
                event: "Stage 1".into(),
                rank: "#4".into(),
                core_id: "a2".into(),
            }],
            url: "https://www.vlr.gg/team/2/sentinels".into(),
        };
        assert_round_trip(&team);
    }

    #[test]
    fn profiles_and_listings_survive_json() {
        assert_round_trip(&Player {
            id: "9".into(),
            name: "TenZ".into(),
            real_name: Some("Tyson Ngo".into()),
            country: Some("ca".into()),
            country_flag: Some("https://www.vlr.gg/img/icons/flags/16/ca.png".into()),
            team: Some("Sentinels".into()),
            agents: vec!["jett".into()],
            past_teams: vec![PastTeam {
                name: "Cloud9".into(),
                period: Some("2020 - 2021".into()),
                url: "https://www.vlr.gg/team/188/cloud9".into(),
            }],
            url: "https://www.vlr.gg/player/9/tenz".into(),
        });
        assert_round_trip(&PlayerStat {
            player: "aspas".into(),
            team: "MIBR".into(),
            agents: vec!["jett".into(), "neon".into()],
            maps_played: "42".into(),
            rating: "1.21".into(),
            acs: "245.3".into(),
            kd: "1.30".into(),
            kast: "74%".into(),
            adr: "158.2".into(),
            kpr: "0.88".into(),
            apr: "0.21".into(),
            fkpr: "0.17".into(),
            fdpr: "0.10".into(),
            hs_percentage: "27%".into(),
            cl_percentage: "18%".into(),
            clutches: "9/50".into(),
            max_kills: "34".into(),
            kills: "812".into(),
            deaths: "624".into(),
            assists: "190".into(),
            first_kills: "158".into(),
            first_deaths: "92".into(),
        });
        assert_round_trip(&Transfer {
            player: "Derke".into(),
            from_team: "Fnatic".into(),
            to_team: "Team Vitality".into(),
            date: "2025/10/10".into(),
            url: "https://www.vlr.gg/player/3187/derke".into(),
        });
        assert_round_trip(&RegionRankings {
            region: "Europe".into(),
            rankings: vec![TeamRanking {
                rank: "1".into(),
                team_name: "Fnatic".into(),
                region: "Europe".into(),
                points: "1890".into(),
                url: "https://www.vlr.gg/team/2593/fnatic".into(),
                logo_url: Some("https://owcdn.net/img/fnc.png".into()),
            }],
        });
    }

    #[test]
    fn match_cards_and_search_results_survive_json() {
        assert_round_trip(&Match {
            team1: "Paper Rex".into(),
            team2: "T1".into(),
            time: "4:00 AM".into(),
            event: "Pacific Stage 2".into(),
            score1: Some("2".into()),
            score2: None,
            url: "https://www.vlr.gg/510001/prx-vs-t1".into(),
            team1_country_flag: Some("https://www.vlr.gg/img/icons/flags/16/sg.png".into()),
            team2_country_flag: None,
            event_icon: Some("https://owcdn.net/img/pacific.png".into()),
        });
        assert_round_trip(&LiveMatch {
            team1: "Paper Rex".into(),
            team2: "T1".into(),
            score1: "1".into(),
            score2: "0".into(),
            event: "Pacific Stage 2".into(),
            status: "LIVE".into(),
            team1_country_flag: None,
            team2_country_flag: Some("https://www.vlr.gg/img/icons/flags/16/kr.png".into()),
            event_icon: None,
            url: "https://www.vlr.gg/510001/prx-vs-t1".into(),
        });
        assert_round_trip(&vec![
            StreamLink {
                platform: StreamPlatform::Twitch,
                url: "https://www.twitch.tv/valorant_pacific".into(),
                language: Some("en".into()),
            },
            StreamLink {
                platform: StreamPlatform::YouTube,
                url: "https://youtu.be/abc".into(),
                language: None,
            },
        ]);
        assert_round_trip(&TeamSearchResult {
            id: "624".into(),
            name: "Paper Rex".into(),
            tag: "PRX".into(),
            region: "Singapore".into(),
            logo: Some("https://owcdn.net/img/prx.png".into()),
            url: "https://www.vlr.gg/team/624/paper-rex".into(),
        });
        assert_round_trip(&PlayerSearchResult {
            id: "17086".into(),
            name: "something".into(),
            real_name: Some("Ilya Petrov".into()),
            team: None,
            country: Some("Russia".into()),
            url: "https://www.vlr.gg/player/17086/something".into(),
        });
    }

    #[test]
    fn comment_children_default_to_empty() {
        let comment: ThreadComment =
            serde_json::from_str(r#"{"author":"alpha","content":"hi","url":null}"#).unwrap();
        assert!(comment.children.is_empty());
    }
}
