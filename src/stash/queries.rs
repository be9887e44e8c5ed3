//! GraphQL documents for the Stash `findPerformers` and `findScenes` queries.

/// Fetches performers with identity, physical attributes, counters, tags
/// and stash IDs.
pub const FIND_PERFORMERS_QUERY: &str = r"
query FindPerformers($filter: FindFilterType) {
  findPerformers(filter: $filter) {
    count
    performers {
      id
      name
      disambiguation
      alias_list
      gender
      birthdate
      death_date
      country
      ethnicity
      eye_color
      hair_color
      height_cm
      weight
      measurements
      fake_tits
      penis_length
      circumcised
      career_length
      tattoos
      piercings
      favorite
      rating100
      details
      image_path
      scene_count
      image_count
      gallery_count
      o_counter
      created_at
      updated_at
      tags {
        id
        name
      }
      stash_ids {
        endpoint
        stash_id
      }
    }
  }
}
";

/// Fetches scenes with counters, file and path metadata, tags, studio,
/// performer cross-references and stash IDs.
pub const FIND_SCENES_QUERY: &str = r"
query FindScenes($filter: FindFilterType) {
  findScenes(filter: $filter) {
    count
    scenes {
      id
      title
      code
      details
      director
      urls
      date
      rating100
      o_counter
      organized
      interactive
      play_count
      play_duration
      resume_time
      last_played_at
      created_at
      updated_at
      files {
        id
        path
        basename
        size
        format
        duration
        video_codec
        audio_codec
        width
        height
        frame_rate
        bit_rate
      }
      paths {
        screenshot
        preview
        stream
        webp
        vtt
        sprite
        funscript
        caption
      }
      studio {
        id
        name
      }
      tags {
        id
        name
      }
      performers {
        id
        name
        gender
        favorite
        measurements
        height_cm
        weight
        o_counter
      }
      stash_ids {
        endpoint
        stash_id
      }
    }
  }
}
";
