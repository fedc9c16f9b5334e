//! Bundled demo fixture: three users and six posts.

use crate::model::{MockCategory, MockPost, MockUser};

struct UserRow {
    id: &'static str,
    username: &'static str,
    email: &'static str,
    avatar: &'static str,
    bio: &'static str,
    followers: u32,
    following: u32,
}

struct PostRow {
    id: &'static str,
    user_id: &'static str,
    username: &'static str,
    content: &'static str,
    images: &'static [&'static str],
    category: MockCategory,
    likes: u32,
    comments: u32,
    created_at: &'static str,
    tags: &'static [&'static str],
}

const USERS: &[UserRow] = &[
    UserRow {
        id: "1",
        username: "creative_designer",
        email: "designer@example.com",
        avatar: "https://i.pravatar.cc/150?img=1",
        bio: "Passionate designer creating unique NFT art",
        followers: 1234,
        following: 567,
    },
    UserRow {
        id: "2",
        username: "art_collector",
        email: "collector@example.com",
        avatar: "https://i.pravatar.cc/150?img=2",
        bio: "Collecting and curating digital masterpieces",
        followers: 890,
        following: 432,
    },
    UserRow {
        id: "3",
        username: "nft_artist",
        email: "artist@example.com",
        avatar: "https://i.pravatar.cc/150?img=3",
        bio: "Creating blockchain-verified digital art",
        followers: 2341,
        following: 123,
    },
];

const POSTS: &[PostRow] = &[
    PostRow {
        id: "1",
        user_id: "1",
        username: "creative_designer",
        content: "Just finished this amazing custom design! Looking for feedback from the community. #DesignInspiration #CreativeWork",
        images: &["https://picsum.photos/seed/design1/800/600"],
        category: MockCategory::Design,
        likes: 342,
        comments: 28,
        created_at: "2026-01-07T10:30:00Z",
        tags: &["DesignInspiration", "CreativeWork"],
    },
    PostRow {
        id: "2",
        user_id: "2",
        username: "art_collector",
        content: "Found this vintage item that needs a creative makeover. Any design ideas? #TheLot #UpcycleArt",
        images: &["https://picsum.photos/seed/lot1/800/600"],
        category: MockCategory::TheLot,
        likes: 156,
        comments: 42,
        created_at: "2026-01-06T15:45:00Z",
        tags: &["TheLot", "UpcycleArt"],
    },
    PostRow {
        id: "3",
        user_id: "3",
        username: "nft_artist",
        content: "My latest NFT collection is live! Featuring abstract digital art with blockchain verification. #NFT #DigitalArt",
        images: &["https://picsum.photos/seed/nft1/800/600"],
        category: MockCategory::Design,
        likes: 789,
        comments: 134,
        created_at: "2026-01-05T09:20:00Z",
        tags: &["NFT", "DigitalArt"],
    },
    PostRow {
        id: "4",
        user_id: "1",
        username: "creative_designer",
        content: "Completed project review - client loved the final design! Here's the before and after. #ReaVise #CompletedWork",
        images: &[
            "https://picsum.photos/seed/completed1/800/600",
            "https://picsum.photos/seed/completed2/800/600",
        ],
        category: MockCategory::ReaVise,
        likes: 523,
        comments: 67,
        created_at: "2026-01-04T14:10:00Z",
        tags: &["ReaVise", "CompletedWork"],
    },
    PostRow {
        id: "5",
        user_id: "2",
        username: "art_collector",
        content: "Showcasing my latest acquisition - a beautifully restored vintage piece with modern touches. #ReaVise #VintageModern",
        images: &["https://picsum.photos/seed/restored1/800/600"],
        category: MockCategory::ReaVise,
        likes: 445,
        comments: 53,
        created_at: "2026-01-03T11:30:00Z",
        tags: &["ReaVise", "VintageModern"],
    },
    PostRow {
        id: "6",
        user_id: "3",
        username: "nft_artist",
        content: "New design concept for an interactive NFT experience. What do you think? #Design #InteractiveArt",
        images: &["https://picsum.photos/seed/concept1/800/600"],
        category: MockCategory::Design,
        likes: 612,
        comments: 89,
        created_at: "2026-01-02T16:45:00Z",
        tags: &["Design", "InteractiveArt"],
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

pub(crate) fn users() -> Vec<MockUser> {
    USERS
        .iter()
        .map(|row| MockUser {
            id: row.id.to_owned(),
            username: row.username.to_owned(),
            email: row.email.to_owned(),
            avatar: Some(row.avatar.to_owned()),
            bio: Some(row.bio.to_owned()),
            followers: row.followers,
            following: row.following,
        })
        .collect()
}

pub(crate) fn posts() -> Vec<MockPost> {
    POSTS
        .iter()
        .map(|row| MockPost {
            id: row.id.to_owned(),
            user_id: row.user_id.to_owned(),
            username: row.username.to_owned(),
            content: row.content.to_owned(),
            images: owned(row.images),
            category: row.category,
            likes: row.likes,
            comments: row.comments,
            created_at: row.created_at.to_owned(),
            tags: owned(row.tags),
        })
        .collect()
}
